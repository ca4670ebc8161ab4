use crate::models::Property;

/// In-memory collection of every listing the session knows about.
///
/// Ordered as seed listings, then legacy listings, then managed listings
/// newest first. Lookups scan the list; it holds tens of entries, not millions.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(seed: Vec<Property>, legacy: Vec<Property>, managed: Vec<Property>) -> Self {
        let mut properties = seed;
        properties.extend(legacy);
        properties.extend(managed);
        Self { properties }
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Put a managed listing at the head of the managed block
    pub fn insert_managed(&mut self, property: Property) {
        let at = self
            .properties
            .iter()
            .position(|existing| existing.ownership.is_managed())
            .unwrap_or(self.properties.len());
        self.properties.insert(at, property);
    }

    /// Swap in a new version of a listing, keeping its position.
    /// Returns false when no listing has that id.
    pub fn replace(&mut self, property: Property) -> bool {
        match self.properties.iter_mut().find(|existing| existing.id == property.id) {
            Some(existing) => {
                *existing = property;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Property> {
        let index = self.properties.iter().position(|property| property.id == id)?;
        Some(self.properties.remove(index))
    }

    /// Locally persisted listings, in store order
    pub fn legacy(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.ownership.is_legacy())
            .collect()
    }

    /// Managed listings created by `user_id`
    pub fn owned_by(&self, user_id: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.owner_id() == Some(user_id))
            .collect()
    }
}
