pub mod engine;
pub mod sort;
pub mod state;

pub use engine::apply;
pub use sort::SortOption;
pub use state::{FilterState, FilterUpdate, ListingFilter};
