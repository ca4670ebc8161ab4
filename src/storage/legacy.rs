//! Legacy listings persisted on this device, kept in the camelCase shape
//! the browser build wrote them in.

use super::{load_json, save_json, KeyValueStorage, LEGACY_PROPERTIES_KEY};
use crate::models::{Contact, Coordinates, ListingType, Ownership, Property, PropertyType};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: f64,
    pub location: String,
    pub address: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl From<&Property> for StoredListing {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            description: property.description.clone(),
            price: property.price,
            listing_type: property.listing_type,
            property_type: property.property_type,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            size: property.size,
            location: property.location.clone(),
            address: property.address.clone(),
            images: property.images.clone(),
            features: property.features.clone(),
            amenities: property.amenities.clone(),
            contact_name: property.contact.name.clone(),
            contact_phone: property.contact.phone.clone(),
            contact_email: property.contact.email.clone(),
            owner_id: property.owner_id().map(str::to_string),
            coordinates: Some(property.coordinates),
        }
    }
}

impl From<StoredListing> for Property {
    fn from(stored: StoredListing) -> Self {
        let ownership = Ownership::classify(&stored.id, stored.owner_id.as_deref());

        Property {
            id: stored.id,
            ownership,
            title: stored.title,
            description: stored.description,
            price: stored.price,
            listing_type: stored.listing_type,
            property_type: stored.property_type,
            bedrooms: stored.bedrooms,
            bathrooms: stored.bathrooms,
            size: stored.size,
            location: stored.location,
            address: stored.address,
            images: stored.images,
            features: stored.features,
            amenities: stored.amenities,
            contact: Contact {
                name: stored.contact_name,
                phone: stored.contact_phone,
                email: stored.contact_email,
            },
            coordinates: stored.coordinates.unwrap_or_default(),
        }
    }
}

/// Read the legacy listings, skipping entries that don't classify as legacy
pub fn load_legacy<S: KeyValueStorage + ?Sized>(storage: &S) -> Result<Vec<Property>> {
    let stored: Vec<StoredListing> = load_json(storage, LEGACY_PROPERTIES_KEY)?.unwrap_or_default();

    let properties: Vec<Property> = stored
        .into_iter()
        .map(Property::from)
        .filter(|property| {
            let keep = property.ownership.is_legacy();
            if !keep {
                warn!("Ignoring stored listing {} without a legacy id", property.id);
            }
            keep
        })
        .collect();

    debug!("Loaded {} legacy listings", properties.len());
    Ok(properties)
}

/// Overwrite the stored set with `properties`
pub fn save_legacy<S: KeyValueStorage + ?Sized>(storage: &S, properties: &[&Property]) -> Result<()> {
    let stored: Vec<StoredListing> = properties.iter().map(|p| StoredListing::from(*p)).collect();
    save_json(storage, LEGACY_PROPERTIES_KEY, &stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use crate::storage::MemoryStorage;

    #[test]
    fn reads_listings_written_by_the_browser_build() {
        let storage = MemoryStorage::new();
        storage
            .set(
                LEGACY_PROPERTIES_KEY,
                r#"[{
                    "id": "custom-1700000000000",
                    "title": "Old flat",
                    "description": "Created before accounts",
                    "price": 1800,
                    "listingType": "rent",
                    "propertyType": "hdb",
                    "bedrooms": 2,
                    "bathrooms": 1,
                    "size": 700,
                    "location": "Bishan",
                    "address": "5 Bishan Street 11",
                    "images": ["https://img.example/a.jpg"],
                    "contactName": "Ann"
                }, {
                    "id": "99",
                    "title": "Stray",
                    "description": "Not a legacy id",
                    "price": 1,
                    "listingType": "sale",
                    "propertyType": "condo",
                    "bedrooms": 1,
                    "bathrooms": 1,
                    "size": 1,
                    "location": "Bishan",
                    "address": "x"
                }]"#,
            )
            .unwrap();

        let legacy = load_legacy(&storage).unwrap();
        assert_eq!(legacy.len(), 1);
        assert_eq!(legacy[0].ownership, Ownership::Legacy);
        assert_eq!(legacy[0].listing_type, ListingType::Rent);
        assert_eq!(legacy[0].contact.name, "Ann");
        assert_eq!(legacy[0].coordinates, Coordinates::default());
    }

    #[test]
    fn saved_listings_load_back_unchanged() {
        let storage = MemoryStorage::new();
        let listing = property("custom-2", Ownership::Legacy);
        save_legacy(&storage, &[&listing]).unwrap();

        assert_eq!(load_legacy(&storage).unwrap(), vec![listing]);
    }

    #[test]
    fn empty_storage_has_no_legacy_listings() {
        assert!(load_legacy(&MemoryStorage::new()).unwrap().is_empty());
    }
}
