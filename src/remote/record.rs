//! Row shapes of the remote `properties` collection.
//! Columns are snake_case and coordinates are two flat nullable columns.

use crate::models::{
    Contact, Coordinates, ListingType, Ownership, Property, PropertyDraft, PropertyType,
    PropertyUpdate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored row as the collection returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRecord {
    pub id: String,
    /// Null for rows imported without an account
    #[serde(default)]
    pub owner_id: Option<String>,
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
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn active() -> bool {
    true
}

impl PropertyRecord {
    pub fn into_property(self) -> Property {
        let coordinates = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Coordinates { lat, lng },
            _ => Coordinates::default(),
        };

        Property {
            ownership: Ownership::classify(&self.id, self.owner_id.as_deref()),
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            listing_type: self.listing_type,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size: self.size,
            location: self.location,
            address: self.address,
            images: self.images.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            amenities: self.amenities.unwrap_or_default(),
            contact: Contact {
                name: self.contact_name.unwrap_or_default(),
                phone: self.contact_phone.unwrap_or_default(),
                email: self.contact_email.unwrap_or_default(),
            },
            coordinates,
        }
    }
}

/// Insert payload; the collection assigns `id` and the timestamps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPropertyRecord {
    pub owner_id: String,
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
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_active: bool,
}

impl NewPropertyRecord {
    /// Build the row for a validated draft owned by `owner_id`
    pub fn from_draft(draft: PropertyDraft, owner_id: &str) -> Self {
        let contact = draft.contact.unwrap_or_default();

        Self {
            owner_id: owner_id.to_string(),
            title: draft.title,
            description: draft.description,
            price: draft.price,
            listing_type: draft.listing_type,
            property_type: draft.property_type,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            size: draft.size,
            location: draft.location,
            address: draft.address,
            images: draft.images,
            features: draft.features,
            amenities: draft.amenities,
            contact_name: contact.name,
            contact_phone: contact.phone,
            contact_email: contact.email,
            lat: draft.coordinates.map(|c| c.lat),
            lng: draft.coordinates.map(|c| c.lng),
            is_active: true,
        }
    }
}

/// Partial update; absent fields are left out of the request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl From<&PropertyUpdate> for PropertyPatch {
    fn from(update: &PropertyUpdate) -> Self {
        let contact = update.contact.as_ref();

        Self {
            title: update.title.clone(),
            description: update.description.clone(),
            price: update.price,
            listing_type: update.listing_type,
            property_type: update.property_type,
            bedrooms: update.bedrooms,
            bathrooms: update.bathrooms,
            size: update.size,
            location: update.location.clone(),
            address: update.address.clone(),
            images: update.images.clone(),
            features: update.features.clone(),
            amenities: update.amenities.clone(),
            contact_name: contact.map(|c| c.name.clone()),
            contact_phone: contact.map(|c| c.phone.clone()),
            contact_email: contact.map(|c| c.email.clone()),
            lat: update.coordinates.map(|c| c.lat),
            lng: update.coordinates.map(|c| c.lng),
        }
    }
}

impl PropertyPatch {
    /// Apply the present columns to a stored row
    pub fn apply_to(&self, record: &mut PropertyRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        if let Some(listing_type) = self.listing_type {
            record.listing_type = listing_type;
        }
        if let Some(property_type) = self.property_type {
            record.property_type = property_type;
        }
        if let Some(bedrooms) = self.bedrooms {
            record.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            record.bathrooms = bathrooms;
        }
        if let Some(size) = self.size {
            record.size = size;
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(address) = &self.address {
            record.address = address.clone();
        }
        if let Some(images) = &self.images {
            record.images = Some(images.clone());
        }
        if let Some(features) = &self.features {
            record.features = Some(features.clone());
        }
        if let Some(amenities) = &self.amenities {
            record.amenities = Some(amenities.clone());
        }
        if let Some(name) = &self.contact_name {
            record.contact_name = Some(name.clone());
        }
        if let Some(phone) = &self.contact_phone {
            record.contact_phone = Some(phone.clone());
        }
        if let Some(email) = &self.contact_email {
            record.contact_email = Some(email.clone());
        }
        if self.lat.is_some() {
            record.lat = self.lat;
        }
        if self.lng.is_some() {
            record.lng = self.lng;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> serde_json::Value {
        json!({
            "id": "8f14e45f",
            "owner_id": "agent-1",
            "title": "Condo by the bay",
            "description": "Sea view",
            "price": 4200,
            "listing_type": "rent",
            "property_type": "condo",
            "bedrooms": 2,
            "bathrooms": 2,
            "size": 900,
            "location": "Marina Bay",
            "address": "10 Marina Boulevard",
            "images": null,
            "features": ["Balcony"],
            "amenities": null,
            "contact_name": "Sarah",
            "contact_phone": null,
            "contact_email": "sarah@example.com",
            "lat": null,
            "lng": 103.85,
            "is_active": true,
            "created_at": "2025-10-19T16:41:49Z",
            "updated_at": "2025-10-19T16:41:49Z"
        })
    }

    #[test]
    fn row_maps_to_a_managed_property() {
        let record: PropertyRecord = serde_json::from_value(row()).unwrap();
        let property = record.into_property();

        assert_eq!(
            property.ownership,
            Ownership::Managed {
                owner_id: "agent-1".to_string()
            }
        );
        assert!(property.images.is_empty());
        assert_eq!(property.features, vec!["Balcony"]);
        assert_eq!(property.contact.phone, "");
        // half-set coordinates fall back to the city centre
        assert_eq!(property.coordinates, Coordinates::default());
    }

    #[test]
    fn ownerless_row_still_decodes() {
        let mut null_owner = row();
        null_owner["owner_id"] = serde_json::Value::Null;
        let record: PropertyRecord = serde_json::from_value(null_owner).unwrap();
        assert_eq!(record.into_property().ownership, Ownership::Seeded);

        let mut missing_owner = row();
        missing_owner.as_object_mut().unwrap().remove("owner_id");
        missing_owner["id"] = json!("custom-1700000000000");
        let record: PropertyRecord = serde_json::from_value(missing_owner).unwrap();
        assert_eq!(record.into_property().ownership, Ownership::Legacy);
    }

    #[test]
    fn patch_sends_only_present_columns() {
        let update = PropertyUpdate {
            price: Some(0.0),
            coordinates: Some(Coordinates {
                lat: 1.3,
                lng: 103.8,
            }),
            ..Default::default()
        };

        let body = serde_json::to_value(PropertyPatch::from(&update)).unwrap();
        assert_eq!(body, json!({ "price": 0.0, "lat": 1.3, "lng": 103.8 }));
    }

    #[test]
    fn draft_without_coordinates_sends_null_columns() {
        let draft = crate::models::fixtures::draft();
        let record = NewPropertyRecord::from_draft(draft, "agent-1");

        assert_eq!(record.owner_id, "agent-1");
        assert!(record.is_active);
        assert_eq!(record.lat, None);
        assert_eq!(record.lng, None);
    }
}
