use crate::auth::AuthSession;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::favorites::Favorites;
use crate::models::{Property, PropertyDraft, PropertyUpdate, User};
use crate::preferences::Preferences;
use crate::remote::{MemoryCollection, RestCollection, SharedCollection};
use crate::storage::{JsonFileStorage, SharedStorage};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything one session needs, built at startup and handed around by reference.
///
/// Favorites follow the signed-in user and are rebuilt on sign in and sign out.
pub struct App {
    pub auth: AuthSession,
    pub catalog: Catalog,
    pub favorites: Favorites,
    pub preferences: Preferences,
    storage: SharedStorage,
}

impl App {
    pub fn new(remote: SharedCollection, storage: SharedStorage, timeout: Duration) -> Result<Self> {
        let auth = AuthSession::restore(storage.clone());
        let favorites = Favorites::for_user(storage.clone(), auth.current_user());
        let preferences = Preferences::load(storage.clone())?;
        let catalog = Catalog::new(remote, storage.clone(), timeout);

        Ok(Self {
            auth,
            catalog,
            favorites,
            preferences,
            storage,
        })
    }

    /// Open the configured storage file and remote collection
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let storage: SharedStorage = Arc::new(
            JsonFileStorage::open(&config.storage_path).with_context(|| {
                format!("Failed to open storage at {}", config.storage_path.display())
            })?,
        );

        let remote: SharedCollection = match &config.remote {
            Some(remote) => Arc::new(RestCollection::new(
                &remote.url,
                &remote.api_key,
                config.request_timeout,
            )?),
            None => Arc::new(MemoryCollection::new()),
        };

        info!(
            "Using {} storage and {} collection",
            storage.backend_name(),
            remote.collection_name()
        );

        Ok(Self::new(remote, storage, config.request_timeout)?)
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    pub fn sign_in(&mut self, user: User) -> Result<()> {
        self.auth.sign_in(user)?;
        self.favorites = Favorites::for_user(self.storage.clone(), self.auth.current_user());
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<()> {
        self.auth.sign_out()?;
        self.favorites = Favorites::for_user(self.storage.clone(), None);
        Ok(())
    }

    pub async fn add_property(&mut self, draft: PropertyDraft) -> Result<Property> {
        self.catalog.add_property(self.auth.current_user(), draft).await
    }

    pub async fn update_property(&mut self, id: &str, update: PropertyUpdate) -> Result<Property> {
        self.catalog
            .update_property(self.auth.current_user(), id, update)
            .await
    }

    pub async fn delete_property(&mut self, id: &str) -> Result<bool> {
        self.catalog.delete_property(self.auth.current_user(), id).await
    }

    pub fn favorite_properties(&self) -> Vec<&Property> {
        self.favorites.resolve(self.catalog.store())
    }
}
