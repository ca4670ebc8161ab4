pub mod authorizer;
pub mod session;

pub use authorizer::{authorize_delete, authorize_edit, can_delete, can_edit};
pub use session::AuthSession;
