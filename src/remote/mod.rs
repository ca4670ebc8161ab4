pub mod memory;
pub mod record;
pub mod rest;
pub mod traits;

pub use memory::MemoryCollection;
pub use record::{NewPropertyRecord, PropertyPatch, PropertyRecord};
pub use rest::RestCollection;
pub use traits::RemoteCollection;

use std::sync::Arc;

pub type SharedCollection = Arc<dyn RemoteCollection>;
