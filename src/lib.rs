//! Client-side core of a Singapore property listing app: filtering, ownership
//! rules and the gateway that keeps the local store in step with the hosted
//! collection.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod gateway;
pub mod models;
pub mod preferences;
pub mod remote;
pub mod storage;
pub mod store;

pub use app::App;
pub use catalog::{Catalog, RequestState};
pub use config::Config;
pub use error::{HunterError, Result};
pub use favorites::Favorites;
pub use filters::{FilterState, FilterUpdate, ListingFilter, SortOption};
pub use gateway::{CancelToken, MutationGateway};
pub use models::{
    Contact, Coordinates, ListingType, Ownership, Property, PropertyDraft, PropertyType,
    PropertyUpdate, User, UserType,
};
pub use preferences::{Preferences, Theme, ViewMode};
pub use store::PropertyStore;
