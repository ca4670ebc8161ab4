use crate::remote::record::{NewPropertyRecord, PropertyPatch, PropertyRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Hosted collection that owns managed listings.
/// Lets the catalog run against the REST backend or an in-process copy.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    /// Active rows, newest first
    async fn list_active(&self) -> Result<Vec<PropertyRecord>>;

    /// One active row, `None` when missing or soft-deleted
    async fn get_by_id(&self, id: &str) -> Result<Option<PropertyRecord>>;

    async fn insert(&self, record: &NewPropertyRecord) -> Result<PropertyRecord>;

    /// Apply `patch` and return the row as stored afterwards
    async fn update(&self, id: &str, patch: &PropertyPatch) -> Result<PropertyRecord>;

    /// Flag the row inactive; it stays in storage
    async fn soft_delete(&self, id: &str) -> Result<()>;

    /// Get the name of the collection backend
    fn collection_name(&self) -> &'static str;
}
