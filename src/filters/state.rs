use crate::error::{HunterError, Result};
use crate::models::{ListingType, PropertyType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Listing type criterion, `All` means no constraint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingFilter {
    #[default]
    All,
    Rent,
    Sale,
}

impl ListingFilter {
    pub fn admits(&self, listing_type: ListingType) -> bool {
        match self {
            ListingFilter::All => true,
            ListingFilter::Rent => listing_type == ListingType::Rent,
            ListingFilter::Sale => listing_type == ListingType::Sale,
        }
    }
}

impl From<ListingType> for ListingFilter {
    fn from(listing_type: ListingType) -> Self {
        match listing_type {
            ListingType::Rent => ListingFilter::Rent,
            ListingType::Sale => ListingFilter::Sale,
        }
    }
}

impl FromStr for ListingFilter {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ListingFilter::All);
        }
        s.parse::<ListingType>().map(ListingFilter::from)
    }
}

/// Search and filter criteria chosen by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub listing_type: ListingFilter,
    /// Empty means any property type
    pub property_types: Vec<PropertyType>,
    /// Minimum number of bedrooms
    pub bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub bathrooms: Option<u32>,
    /// Empty means any location
    pub locations: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search_term: String,
}

/// Partial change to a [`FilterState`].
///
/// Bounds are doubly optional: `None` leaves the bound alone,
/// `Some(None)` clears it and `Some(Some(n))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub listing_type: Option<ListingFilter>,
    pub property_types: Option<Vec<PropertyType>>,
    pub bedrooms: Option<Option<u32>>,
    pub bathrooms: Option<Option<u32>>,
    pub locations: Option<Vec<String>>,
    pub min_price: Option<Option<f64>>,
    pub max_price: Option<Option<f64>>,
    pub search_term: Option<String>,
}

impl FilterState {
    /// Merge a partial update, leaving absent fields as they are
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(listing_type) = update.listing_type {
            self.listing_type = listing_type;
        }
        if let Some(property_types) = update.property_types {
            self.property_types = property_types;
        }
        if let Some(bedrooms) = update.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(locations) = update.locations {
            self.locations = locations;
        }
        if let Some(min_price) = update.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = update.max_price {
            self.max_price = max_price;
        }
        if let Some(search_term) = update.search_term {
            self.search_term = search_term;
        }
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterState::default()
    }

    /// Add the type when missing, remove it when already selected
    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        toggle(&mut self.property_types, property_type);
    }

    pub fn toggle_location(&mut self, location: &str) {
        toggle(&mut self.locations, location.to_string());
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| *existing == item) {
        Some(index) => {
            items.remove(index);
        }
        None => items.push(item),
    }
}
