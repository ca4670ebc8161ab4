use crate::filters::{FilterState, SortOption};
use crate::models::Property;

impl FilterState {
    /// Whether `property` passes every active criterion
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_with(property, &self.search_term.to_lowercase())
    }

    // `needle` is the lower-cased search term, computed once per pass
    fn matches_with(&self, property: &Property, needle: &str) -> bool {
        if !self.listing_type.admits(property.listing_type) {
            return false;
        }

        if !self.property_types.is_empty() && !self.property_types.contains(&property.property_type)
        {
            return false;
        }

        // Room counts are lower bounds, "5+" also admits 6, 7, ...
        if self.bedrooms.is_some_and(|min| property.bedrooms < min) {
            return false;
        }
        if self.bathrooms.is_some_and(|min| property.bathrooms < min) {
            return false;
        }

        if !self.locations.is_empty() && !self.locations.contains(&property.location) {
            return false;
        }

        if self.min_price.is_some_and(|min| property.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price > max) {
            return false;
        }

        needle.is_empty() || matches_search(property, needle)
    }
}

fn matches_search(property: &Property, needle: &str) -> bool {
    [
        &property.title,
        &property.description,
        &property.address,
        &property.location,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filter `properties` by `filter`, then order by `sort`.
///
/// The sort is stable, so equal keys keep store order.
pub fn apply<'a>(
    properties: &'a [Property],
    filter: &FilterState,
    sort: SortOption,
) -> Vec<&'a Property> {
    let needle = filter.search_term.to_lowercase();

    let mut results: Vec<&Property> = properties
        .iter()
        .filter(|property| filter.matches_with(property, &needle))
        .collect();

    if sort != SortOption::None {
        results.sort_by(|a, b| sort.compare(a, b));
    }

    results
}
