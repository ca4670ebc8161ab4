pub mod locations;
pub mod seed;

use crate::error::{HunterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Id prefix carried by listings created before ownership tracking existed
pub const LEGACY_ID_PREFIX: &str = "custom-";

/// Singapore city centre, used when a listing has no coordinates
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 1.3521,
    lng: 103.8198,
};

/// Whether a listing is for rent or for sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rent" => Ok(ListingType::Rent),
            "sale" => Ok(ListingType::Sale),
            other => Err(HunterError::ValidationFailure(format!(
                "unknown listing type '{other}'"
            ))),
        }
    }
}

/// Kind of dwelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Hdb,
    Condo,
    Landed,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Hdb => "hdb",
            PropertyType::Condo => "condo",
            PropertyType::Landed => "landed",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Hdb => "HDB",
            PropertyType::Condo => "Condominium",
            PropertyType::Landed => "Landed",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hdb" => Ok(PropertyType::Hdb),
            "condo" => Ok(PropertyType::Condo),
            "landed" => Ok(PropertyType::Landed),
            other => Err(HunterError::ValidationFailure(format!(
                "unknown property type '{other}'"
            ))),
        }
    }
}

/// Map position of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_COORDINATES
    }
}

/// Who may change a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ownership {
    /// Bundled demonstration listing, read-only
    Seeded,
    /// Locally stored listing that predates ownership tracking
    Legacy,
    /// Remote listing owned by one user
    Managed { owner_id: String },
}

impl Ownership {
    /// Type a listing that arrives as an id plus an optional owner reference
    pub fn classify(id: &str, owner_id: Option<&str>) -> Self {
        match owner_id.filter(|owner| !owner.is_empty()) {
            Some(owner) => Ownership::Managed {
                owner_id: owner.to_string(),
            },
            None if id.starts_with(LEGACY_ID_PREFIX) => Ownership::Legacy,
            None => Ownership::Seeded,
        }
    }

    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Ownership::Managed { owner_id } => Some(owner_id),
            _ => None,
        }
    }

    pub fn is_managed(&self) -> bool {
        matches!(self, Ownership::Managed { .. })
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Ownership::Legacy)
    }
}

/// Contact details shown on a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub ownership: Ownership,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor area in square feet
    pub size: f64,
    pub location: String,
    pub address: String,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    pub contact: Contact,
    pub coordinates: Coordinates,
}

impl Property {
    pub fn owner_id(&self) -> Option<&str> {
        self.ownership.owner_id()
    }

    /// A listing is complete once it has at least one image
    pub fn is_complete(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Account kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Hunter,
    Agent,
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_license: Option<String>,
}

impl User {
    /// Stable account id for an email address, so signing in again keeps
    /// ownership of earlier listings
    pub fn id_for_email(email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("mailto:{normalized}").as_bytes()).to_string()
    }

    pub fn is_agent(&self) -> bool {
        self.user_type == UserType::Agent
    }
}

/// A listing as submitted by an agent, before the remote collection assigns an id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyDraft {
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
    pub contact: Option<Contact>,
    pub coordinates: Option<Coordinates>,
}

impl PropertyDraft {
    /// Check required fields and drop blank list entries.
    /// Fails on the first offending field.
    pub fn validate(mut self) -> Result<Self> {
        if self.title.trim().is_empty() {
            return Err(invalid("title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(invalid("description is required"));
        }
        if self.address.trim().is_empty() {
            return Err(invalid("address is required"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(invalid("size must be a non-negative number"));
        }
        if !locations::is_known(&self.location) {
            return Err(invalid(&format!("unknown location '{}'", self.location)));
        }

        self.images = non_blank(self.images);
        self.features = non_blank(self.features);
        self.amenities = non_blank(self.amenities);

        if self.images.is_empty() {
            return Err(invalid("at least one image is required"));
        }

        Ok(self)
    }
}

/// Partial change to a listing; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub listing_type: Option<ListingType>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub size: Option<f64>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub contact: Option<Contact>,
    pub coordinates: Option<Coordinates>,
}

impl PropertyUpdate {
    pub fn is_empty(&self) -> bool {
        *self == PropertyUpdate::default()
    }

    /// Drop blank list entries and check the fields being changed
    /// against the same rules as a draft
    pub fn validate(mut self) -> Result<Self> {
        let blank = |value: &Option<String>| value.as_ref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.title) {
            return Err(invalid("title is required"));
        }
        if blank(&self.description) {
            return Err(invalid("description is required"));
        }
        if blank(&self.address) {
            return Err(invalid("address is required"));
        }
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(invalid("price must be a non-negative number"));
        }
        if self.size.is_some_and(|s| !s.is_finite() || s < 0.0) {
            return Err(invalid("size must be a non-negative number"));
        }
        if let Some(location) = &self.location {
            if !locations::is_known(location) {
                return Err(invalid(&format!("unknown location '{location}'")));
            }
        }

        self.images = self.images.map(non_blank);
        self.features = self.features.map(non_blank);
        self.amenities = self.amenities.map(non_blank);

        if self.images.as_ref().is_some_and(Vec::is_empty) {
            return Err(invalid("at least one image is required"));
        }

        Ok(self)
    }

    /// Merge the present fields into `property`
    pub fn apply_to(&self, property: &mut Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(listing_type) = self.listing_type {
            property.listing_type = listing_type;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(size) = self.size {
            property.size = size;
        }
        if let Some(location) = &self.location {
            property.location = location.clone();
        }
        if let Some(address) = &self.address {
            property.address = address.clone();
        }
        if let Some(images) = &self.images {
            property.images = images.clone();
        }
        if let Some(features) = &self.features {
            property.features = features.clone();
        }
        if let Some(amenities) = &self.amenities {
            property.amenities = amenities.clone();
        }
        if let Some(contact) = &self.contact {
            property.contact = contact.clone();
        }
        if let Some(coordinates) = self.coordinates {
            property.coordinates = coordinates;
        }
    }
}

fn invalid(reason: &str) -> HunterError {
    HunterError::ValidationFailure(reason.to_string())
}

fn non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn classify_keeps_the_three_ownership_kinds() {
        assert_eq!(
            Ownership::classify("abc", Some("agent-1")),
            Ownership::Managed {
                owner_id: "agent-1".to_string()
            }
        );
        assert_eq!(Ownership::classify("custom-17", None), Ownership::Legacy);
        assert_eq!(Ownership::classify("3", None), Ownership::Seeded);
        // an empty owner reference counts as absent
        assert_eq!(Ownership::classify("custom-1", Some("")), Ownership::Legacy);
    }

    #[test]
    fn enums_parse_their_wire_names() {
        assert_eq!("Rent".parse::<ListingType>().unwrap(), ListingType::Rent);
        assert_eq!("landed".parse::<PropertyType>().unwrap(), PropertyType::Landed);
        assert!(matches!(
            "villa".parse::<PropertyType>(),
            Err(HunterError::ValidationFailure(_))
        ));
        assert_eq!(serde_json::to_string(&PropertyType::Hdb).unwrap(), "\"hdb\"");
    }

    #[test]
    fn validate_strips_blank_entries() {
        let draft = draft().validate().unwrap();
        assert_eq!(draft.features, vec!["Renovated"]);
        assert_eq!(draft.amenities, vec!["Pool"]);
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let mut no_title = draft();
        no_title.title = "   ".to_string();
        assert_eq!(
            no_title.validate(),
            Err(HunterError::ValidationFailure("title is required".to_string()))
        );

        let mut no_images = draft();
        no_images.images = vec![" ".to_string()];
        assert!(matches!(
            no_images.validate(),
            Err(HunterError::ValidationFailure(_))
        ));

        let mut bad_location = draft();
        bad_location.location = "Atlantis".to_string();
        assert!(bad_location.validate().is_err());

        let mut negative = draft();
        negative.price = -1.0;
        assert!(negative.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_price() {
        let mut free = draft();
        free.price = 0.0;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut listing = managed("5", "agent-3");
        let update = PropertyUpdate {
            price: Some(1000.0),
            bedrooms: Some(0),
            ..Default::default()
        };
        update.apply_to(&mut listing);

        assert_eq!(listing.price, 1000.0);
        assert_eq!(listing.bedrooms, 0);
        assert_eq!(listing.title, "Listing 5");
        assert!(!update.is_empty());
        assert!(PropertyUpdate::default().is_empty());
    }

    #[test]
    fn email_gives_the_same_user_id_every_time() {
        let first = User::id_for_email("Agent@Example.com");
        assert_eq!(first, User::id_for_email("  agent@example.com "));
        assert_ne!(first, User::id_for_email("other@example.com"));
        assert!(user("a").is_agent());
    }

    #[test]
    fn update_validation_checks_only_present_fields() {
        assert!(PropertyUpdate::default().validate().is_ok());

        let cleared_images = PropertyUpdate {
            images: Some(vec!["".to_string()]),
            ..Default::default()
        };
        assert!(cleared_images.validate().is_err());

        let features = PropertyUpdate {
            features: Some(vec!["Balcony".to_string(), " ".to_string()]),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(features.features, Some(vec!["Balcony".to_string()]));

        let blank_title = PropertyUpdate {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(blank_title.validate().is_err());
    }
}
