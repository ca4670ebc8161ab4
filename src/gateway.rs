use crate::auth::{authorize_delete, authorize_edit};
use crate::error::{HunterError, Result};
use crate::models::{Contact, Ownership, Property, PropertyDraft, PropertyUpdate, User};
use crate::remote::{NewPropertyRecord, PropertyPatch, SharedCollection};
use crate::storage::legacy::save_legacy;
use crate::storage::SharedStorage;
use crate::store::PropertyStore;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Clonable handle that aborts whichever remote call is waiting on it
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once `cancel` has been called on any clone
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as self, so this only returns on cancel
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

/// Every change to a listing goes through here.
///
/// Managed listings are written to the remote collection and the store is
/// only touched once the collection has accepted the change. Legacy listings
/// never leave the device.
pub struct MutationGateway {
    remote: SharedCollection,
    storage: SharedStorage,
    timeout: Duration,
}

impl MutationGateway {
    pub fn new(remote: SharedCollection, storage: SharedStorage, timeout: Duration) -> Self {
        Self {
            remote,
            storage,
            timeout,
        }
    }

    pub fn collection_name(&self) -> &'static str {
        self.remote.collection_name()
    }

    /// Active managed listings, newest first
    pub async fn fetch_active(&self, cancel: Option<&CancelToken>) -> Result<Vec<Property>> {
        let mut rows = self
            .call("list properties", cancel, self.remote.list_active())
            .await?;
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!("Fetched {} managed listings from {}", rows.len(), self.collection_name());
        Ok(rows.into_iter().map(|row| row.into_property()).collect())
    }

    pub async fn fetch_one(&self, id: &str, cancel: Option<&CancelToken>) -> Result<Option<Property>> {
        let row = self
            .call("fetch property", cancel, self.remote.get_by_id(id))
            .await?;
        Ok(row.map(|row| row.into_property()))
    }

    /// Publish a new managed listing owned by `user`
    pub async fn create(
        &self,
        store: &mut PropertyStore,
        user: Option<&User>,
        draft: PropertyDraft,
        cancel: Option<&CancelToken>,
    ) -> Result<Property> {
        let user = user.ok_or(HunterError::NotAuthenticated)?;
        let mut draft = draft.validate()?;

        if draft.contact.is_none() {
            draft.contact = Some(Contact {
                name: user.name.clone(),
                phone: user.phone.clone().unwrap_or_default(),
                email: user.email.clone(),
            });
        }

        let record = NewPropertyRecord::from_draft(draft, &user.id);
        let row = self
            .call("create property", cancel, self.remote.insert(&record))
            .await?;

        let property = row.into_property();
        info!("🏠 Created listing {} for {}", property.id, user.email);
        store.insert_managed(property.clone());
        Ok(property)
    }

    pub async fn update(
        &self,
        store: &mut PropertyStore,
        user: Option<&User>,
        id: &str,
        update: PropertyUpdate,
        cancel: Option<&CancelToken>,
    ) -> Result<Property> {
        let current = authorize_edit(store, id, user)?.clone();
        let update = update.validate()?;

        if update.is_empty() {
            debug!("Nothing to change on {}", id);
            return Ok(current);
        }

        let updated = match &current.ownership {
            Ownership::Managed { .. } => {
                let patch = PropertyPatch::from(&update);
                let row = self
                    .call("update property", cancel, self.remote.update(id, &patch))
                    .await?;
                row.into_property()
            }
            Ownership::Legacy => {
                let mut updated = current.clone();
                update.apply_to(&mut updated);
                let legacy: Vec<&Property> = store
                    .legacy()
                    .into_iter()
                    .map(|p| if p.id == updated.id { &updated } else { p })
                    .collect();
                save_legacy(self.storage.as_ref(), &legacy).map_err(HunterError::storage)?;
                updated
            }
            Ownership::Seeded => return Err(HunterError::NotAuthorized),
        };

        store.replace(updated.clone());
        info!("✏️  Updated listing {}", id);
        Ok(updated)
    }

    pub async fn delete(
        &self,
        store: &mut PropertyStore,
        user: Option<&User>,
        id: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<bool> {
        let ownership = authorize_delete(store, id, user)?.ownership.clone();

        match ownership {
            Ownership::Managed { .. } => {
                self.call("delete property", cancel, self.remote.soft_delete(id))
                    .await?;
            }
            Ownership::Legacy => {
                let remaining: Vec<&Property> =
                    store.legacy().into_iter().filter(|p| p.id != id).collect();
                save_legacy(self.storage.as_ref(), &remaining).map_err(HunterError::storage)?;
            }
            Ownership::Seeded => return Err(HunterError::NotAuthorized),
        }

        store.remove(id);
        info!("🗑️  Deleted listing {}", id);
        Ok(true)
    }

    /// Run one remote call under the request timeout and the cancel token
    async fn call<T>(
        &self,
        what: &str,
        cancel: Option<&CancelToken>,
        request: impl Future<Output = anyhow::Result<T>>,
    ) -> Result<T> {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(HunterError::Cancelled);
        }

        let cancelled = async {
            match cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            _ = cancelled => {
                warn!("Cancelled: {}", what);
                Err(HunterError::Cancelled)
            }
            outcome = tokio::time::timeout(self.timeout, request) => match outcome {
                Ok(Ok(value)) => Ok(value),
                Ok(Err(e)) => {
                    warn!("Failed to {}: {:#}", what, e);
                    Err(HunterError::remote(e))
                }
                Err(_) => {
                    warn!("Timed out trying to {} after {:?}", what, self.timeout);
                    Err(HunterError::RemoteFailure(format!(
                        "{what} timed out after {:?}",
                        self.timeout
                    )))
                }
            }
        }
    }
}
