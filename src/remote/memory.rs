use crate::remote::record::{NewPropertyRecord, PropertyPatch, PropertyRecord};
use crate::remote::traits::RemoteCollection;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// In-process stand-in for the hosted collection.
///
/// Used when no remote is configured. It can be told to fail or to stall so
/// callers can exercise their error paths.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    // newest first
    rows: Mutex<Vec<PropertyRecord>>,
    failing: AtomicBool,
    stalled: AtomicBool,
    calls: AtomicUsize,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make every following call hang until dropped
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every row, including soft-deleted ones
    pub fn snapshot(&self) -> Vec<PropertyRecord> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }

    async fn enter(&self, operation: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("Memory collection: {}", operation);

        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("memory collection is failing on purpose ({operation})");
        }
        Ok(())
    }

    fn with_rows_mut<T>(&self, f: impl FnOnce(&mut Vec<PropertyRecord>) -> Result<T>) -> Result<T> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| anyhow!("memory collection lock poisoned"))?;
        f(&mut rows)
    }
}

#[async_trait]
impl RemoteCollection for MemoryCollection {
    async fn list_active(&self) -> Result<Vec<PropertyRecord>> {
        self.enter("list_active").await?;
        self.with_rows_mut(|rows| Ok(rows.iter().filter(|row| row.is_active).cloned().collect()))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<PropertyRecord>> {
        self.enter("get_by_id").await?;
        self.with_rows_mut(|rows| {
            Ok(rows
                .iter()
                .find(|row| row.id == id && row.is_active)
                .cloned())
        })
    }

    async fn insert(&self, record: &NewPropertyRecord) -> Result<PropertyRecord> {
        self.enter("insert").await?;

        let now = Utc::now();
        let row = PropertyRecord {
            id: Uuid::new_v4().to_string(),
            owner_id: Some(record.owner_id.clone()),
            title: record.title.clone(),
            description: record.description.clone(),
            price: record.price,
            listing_type: record.listing_type,
            property_type: record.property_type,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size: record.size,
            location: record.location.clone(),
            address: record.address.clone(),
            images: Some(record.images.clone()),
            features: Some(record.features.clone()),
            amenities: Some(record.amenities.clone()),
            contact_name: Some(record.contact_name.clone()),
            contact_phone: Some(record.contact_phone.clone()),
            contact_email: Some(record.contact_email.clone()),
            lat: record.lat,
            lng: record.lng,
            is_active: record.is_active,
            created_at: now,
            updated_at: Some(now),
        };

        self.with_rows_mut(|rows| {
            rows.insert(0, row.clone());
            Ok(row)
        })
    }

    async fn update(&self, id: &str, patch: &PropertyPatch) -> Result<PropertyRecord> {
        self.enter("update").await?;
        self.with_rows_mut(|rows| {
            let row = rows
                .iter_mut()
                .find(|row| row.id == id)
                .ok_or_else(|| anyhow!("no row with id {id}"))?;
            patch.apply_to(row);
            row.updated_at = Some(Utc::now());
            Ok(row.clone())
        })
    }

    async fn soft_delete(&self, id: &str) -> Result<()> {
        self.enter("soft_delete").await?;
        self.with_rows_mut(|rows| {
            let row = rows
                .iter_mut()
                .find(|row| row.id == id)
                .ok_or_else(|| anyhow!("no row with id {id}"))?;
            row.is_active = false;
            Ok(())
        })
    }

    fn collection_name(&self) -> &'static str {
        "memory"
    }
}
