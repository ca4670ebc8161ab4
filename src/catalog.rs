use crate::auth;
use crate::error::{HunterError, Result};
use crate::filters::{self, FilterState, FilterUpdate, SortOption};
use crate::gateway::{CancelToken, MutationGateway};
use crate::models::seed::seed_properties;
use crate::models::{Property, PropertyDraft, PropertyUpdate, User};
use crate::remote::SharedCollection;
use crate::storage::legacy::load_legacy;
use crate::storage::SharedStorage;
use crate::store::PropertyStore;
use std::time::Duration;
use tracing::{info, warn};

pub const LOAD_FAILED: &str = "Failed to load properties";

/// Progress of the most recent remote request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The listings a session browses, with the filters and sort applied to them
pub struct Catalog {
    store: PropertyStore,
    filter: FilterState,
    sort: SortOption,
    state: RequestState,
    gateway: MutationGateway,
    storage: SharedStorage,
    cancel: CancelToken,
}

impl Catalog {
    /// Starts with the seed listings only; call `load` to pick up the rest
    pub fn new(remote: SharedCollection, storage: SharedStorage, timeout: Duration) -> Self {
        Self {
            store: PropertyStore::from_parts(seed_properties(), Vec::new(), Vec::new()),
            filter: FilterState::default(),
            sort: SortOption::default(),
            state: RequestState::Idle,
            gateway: MutationGateway::new(remote, storage.clone(), timeout),
            storage,
            cancel: CancelToken::new(),
        }
    }

    /// Rebuild the store from seed, local legacy listings and the remote collection.
    /// A remote failure falls back to seed and legacy listings and is recorded in `state`.
    pub async fn load(&mut self) {
        self.state = RequestState::Pending;

        let legacy = load_legacy(self.storage.as_ref()).unwrap_or_else(|e| {
            warn!("Ignoring unreadable legacy listings: {:#}", e);
            Vec::new()
        });

        match self.gateway.fetch_active(Some(&self.cancel)).await {
            Ok(managed) => {
                info!(
                    "📋 Loaded {} legacy and {} managed listings from {}",
                    legacy.len(),
                    managed.len(),
                    self.gateway.collection_name()
                );
                self.store = PropertyStore::from_parts(seed_properties(), legacy, managed);
                self.state = RequestState::Idle;
            }
            Err(e) => {
                warn!("{}: {}, showing local listings only", LOAD_FAILED, e);
                self.store = PropertyStore::from_parts(seed_properties(), legacy, Vec::new());
                self.state = RequestState::Failed(LOAD_FAILED.to_string());
            }
        }

        self.renew_cancel();
    }

    pub async fn refresh(&mut self) {
        self.load().await
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Handle that cancels the request currently in flight
    pub fn cancel_handle(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn filtered(&self) -> Vec<&Property> {
        filters::apply(self.store.all(), &self.filter, self.sort)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filter.apply(update);
    }

    pub fn reset_filters(&mut self) {
        self.filter.reset();
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.store.get(id)
    }

    /// Look in the store first, then ask the remote collection
    pub async fn fetch(&mut self, id: &str) -> Result<Option<Property>> {
        if let Some(property) = self.store.get(id) {
            return Ok(Some(property.clone()));
        }

        self.state = RequestState::Pending;
        let outcome = self.gateway.fetch_one(id, Some(&self.cancel)).await;
        self.finish(&outcome, "Failed to load property");
        outcome
    }

    pub fn user_properties(&self, user: &User) -> Vec<&Property> {
        self.store.owned_by(&user.id)
    }

    pub fn can_edit(&self, id: &str, user: Option<&User>) -> bool {
        auth::can_edit(&self.store, id, user)
    }

    pub fn can_delete(&self, id: &str, user: Option<&User>) -> bool {
        auth::can_delete(&self.store, id, user)
    }

    pub async fn add_property(&mut self, user: Option<&User>, draft: PropertyDraft) -> Result<Property> {
        self.state = RequestState::Pending;
        let outcome = self
            .gateway
            .create(&mut self.store, user, draft, Some(&self.cancel))
            .await;
        self.finish(&outcome, "Failed to create property");
        outcome
    }

    pub async fn update_property(
        &mut self,
        user: Option<&User>,
        id: &str,
        update: PropertyUpdate,
    ) -> Result<Property> {
        self.state = RequestState::Pending;
        let outcome = self
            .gateway
            .update(&mut self.store, user, id, update, Some(&self.cancel))
            .await;
        self.finish(&outcome, "Failed to update property");
        outcome
    }

    pub async fn delete_property(&mut self, user: Option<&User>, id: &str) -> Result<bool> {
        self.state = RequestState::Pending;
        let outcome = self
            .gateway
            .delete(&mut self.store, user, id, Some(&self.cancel))
            .await;
        self.finish(&outcome, "Failed to delete property");
        outcome
    }

    /// Only request failures are kept in `state`; rejected input is the caller's to report
    fn finish<T>(&mut self, outcome: &Result<T>, failure: &str) {
        self.state = match outcome {
            Err(HunterError::RemoteFailure(_) | HunterError::Storage(_) | HunterError::Cancelled) => {
                RequestState::Failed(failure.to_string())
            }
            _ => RequestState::Idle,
        };
        self.renew_cancel();
    }

    fn renew_cancel(&mut self) {
        if self.cancel.is_cancelled() {
            self.cancel = CancelToken::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ListingFilter;
    use crate::models::fixtures::{draft, user};
    use crate::models::{Ownership, PropertyType};
    use crate::remote::{MemoryCollection, NewPropertyRecord, RemoteCollection};
    use crate::storage::legacy::save_legacy;
    use crate::storage::memory::MemoryStorage;
    use std::sync::Arc;

    fn catalog(remote: &Arc<MemoryCollection>, storage: &Arc<MemoryStorage>) -> Catalog {
        Catalog::new(remote.clone(), storage.clone(), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn load_orders_seed_legacy_then_newest_managed() {
        let remote = Arc::new(MemoryCollection::new());
        let older = remote
            .insert(&NewPropertyRecord::from_draft(draft(), "agent-1"))
            .await
            .unwrap();
        let newer = remote
            .insert(&NewPropertyRecord::from_draft(draft(), "agent-2"))
            .await
            .unwrap();

        let storage = Arc::new(MemoryStorage::new());
        let mut legacy = seed_properties().remove(0);
        legacy.id = "custom-42".to_string();
        legacy.ownership = Ownership::Legacy;
        save_legacy(storage.as_ref(), &[&legacy]).unwrap();

        let mut catalog = catalog(&remote, &storage);
        catalog.load().await;

        let ids: Vec<&str> = catalog.store().all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["1", "2", "3", "4", "5", "6", "7", "8", "custom-42", newer.id.as_str(), older.id.as_str()]
        );
        assert_eq!(catalog.state(), &RequestState::Idle);
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_local_listings() {
        let remote = Arc::new(MemoryCollection::new());
        remote.set_failing(true);
        let storage = Arc::new(MemoryStorage::new());

        let mut catalog = catalog(&remote, &storage);
        catalog.load().await;

        assert_eq!(catalog.store().len(), seed_properties().len());
        assert_eq!(catalog.state().error(), Some(LOAD_FAILED));
    }

    #[tokio::test]
    async fn filters_and_sort_shape_the_view() {
        let remote = Arc::new(MemoryCollection::new());
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = catalog(&remote, &storage);
        catalog.load().await;

        catalog.update_filters(FilterUpdate {
            listing_type: Some(ListingFilter::Sale),
            property_types: Some(vec![PropertyType::Landed]),
            ..Default::default()
        });
        catalog.set_sort(SortOption::PriceDesc);

        let ids: Vec<&str> = catalog.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "8"]);

        catalog.reset_filters();
        assert_eq!(catalog.filtered().len(), 8);
        assert_eq!(catalog.filtered()[0].id, "3");
    }

    #[tokio::test]
    async fn fetch_falls_through_to_remote() {
        let remote = Arc::new(MemoryCollection::new());
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = catalog(&remote, &storage);

        let row = remote
            .insert(&NewPropertyRecord::from_draft(draft(), "agent-1"))
            .await
            .unwrap();

        assert_eq!(catalog.fetch("1").await.unwrap().unwrap().id, "1");
        assert_eq!(remote.calls(), 1);

        let fetched = catalog.fetch(&row.id).await.unwrap().unwrap();
        assert_eq!(fetched.owner_id(), Some("agent-1"));
        assert!(catalog.fetch("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn mutations_track_request_state() {
        let remote = Arc::new(MemoryCollection::new());
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = catalog(&remote, &storage);
        let agent = user("agent-1");

        let created = catalog.add_property(Some(&agent), draft()).await.unwrap();
        assert_eq!(catalog.state(), &RequestState::Idle);
        assert_eq!(catalog.user_properties(&agent).len(), 1);
        assert!(catalog.can_edit(&created.id, Some(&agent)));
        assert!(!catalog.can_delete(&created.id, Some(&user("agent-2"))));

        remote.set_failing(true);
        let result = catalog.delete_property(Some(&agent), &created.id).await;
        assert!(result.is_err());
        assert_eq!(catalog.state().error(), Some("Failed to delete property"));
        assert!(catalog.get(&created.id).is_some());

        let rejected = catalog.delete_property(None, &created.id).await;
        assert_eq!(rejected, Err(HunterError::NotAuthenticated));
        assert_eq!(catalog.state(), &RequestState::Idle);
    }

    #[tokio::test]
    async fn cancelled_request_leaves_a_fresh_token() {
        let remote = Arc::new(MemoryCollection::new());
        remote.set_stalled(true);
        let storage = Arc::new(MemoryStorage::new());
        let mut catalog = catalog(&remote, &storage);

        let handle = catalog.cancel_handle();
        handle.cancel();
        catalog.load().await;

        assert_eq!(catalog.state().error(), Some(LOAD_FAILED));
        assert!(!catalog.cancel_handle().is_cancelled());
    }
}
