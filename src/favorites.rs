use crate::error::{HunterError, Result};
use crate::models::{Property, User};
use crate::storage::{favorites_key, load_json, save_json, SharedStorage};
use crate::store::PropertyStore;
use tracing::{debug, warn};

/// Listing ids one user has starred, in the order they were added.
///
/// Signed out, the list is empty and changes are not persisted.
pub struct Favorites {
    storage: SharedStorage,
    user_id: Option<String>,
    ids: Vec<String>,
}

impl Favorites {
    pub fn for_user(storage: SharedStorage, user: Option<&User>) -> Self {
        let user_id = user.map(|user| user.id.clone());

        let ids = match &user_id {
            Some(id) => match load_json::<Vec<String>, _>(storage.as_ref(), &favorites_key(id)) {
                Ok(ids) => ids.unwrap_or_default(),
                Err(e) => {
                    warn!("Discarding unreadable favorites for {}: {:#}", id, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!("Loaded {} favorites", ids.len());
        Self {
            storage,
            user_id,
            ids,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.ids.iter().any(|id| id == property_id)
    }

    /// Returns false when the listing was already a favorite
    pub fn add(&mut self, property_id: &str) -> Result<bool> {
        if self.contains(property_id) {
            return Ok(false);
        }
        self.ids.push(property_id.to_string());
        self.persist()?;
        Ok(true)
    }

    /// Returns false when the listing was not a favorite
    pub fn remove(&mut self, property_id: &str) -> Result<bool> {
        let before = self.ids.len();
        self.ids.retain(|id| id != property_id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip a listing in or out; returns whether it is now a favorite
    pub fn toggle(&mut self, property_id: &str) -> Result<bool> {
        if self.contains(property_id) {
            self.remove(property_id)?;
            Ok(false)
        } else {
            self.add(property_id)
        }
    }

    /// Favorited listings still in `store`, in favorite order
    pub fn resolve<'a>(&self, store: &'a PropertyStore) -> Vec<&'a Property> {
        self.ids.iter().filter_map(|id| store.get(id)).collect()
    }

    fn persist(&self) -> Result<()> {
        match &self.user_id {
            Some(user_id) => save_json(self.storage.as_ref(), &favorites_key(user_id), &self.ids)
                .map_err(HunterError::storage),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{property, user};
    use crate::models::Ownership;
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use std::sync::Arc;

    #[test]
    fn favorites_are_kept_per_user() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let alice = user("alice");

        let mut favorites = Favorites::for_user(storage.clone(), Some(&alice));
        assert!(favorites.add("3").unwrap());
        assert!(!favorites.add("3").unwrap());
        assert!(favorites.add("1").unwrap());

        let reloaded = Favorites::for_user(storage.clone(), Some(&alice));
        assert_eq!(reloaded.ids(), ["3".to_string(), "1".to_string()]);
        assert_eq!(storage.get("favorites-alice").unwrap().unwrap(), r#"["3","1"]"#);

        let bob = Favorites::for_user(storage, Some(&user("bob")));
        assert!(bob.ids().is_empty());
    }

    #[test]
    fn toggle_and_remove() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut favorites = Favorites::for_user(storage, Some(&user("alice")));

        assert!(favorites.toggle("2").unwrap());
        assert!(favorites.contains("2"));
        assert!(!favorites.toggle("2").unwrap());
        assert!(!favorites.remove("2").unwrap());
    }

    #[test]
    fn signed_out_favorites_are_not_persisted() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut favorites = Favorites::for_user(storage.clone(), None);

        favorites.add("1").unwrap();
        assert!(favorites.contains("1"));
        assert!(Favorites::for_user(storage, None).ids().is_empty());
    }

    #[test]
    fn resolve_skips_listings_that_are_gone() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut favorites = Favorites::for_user(storage, Some(&user("alice")));
        for id in ["2", "deleted", "1"] {
            favorites.add(id).unwrap();
        }

        let store = PropertyStore::from_parts(
            vec![property("1", Ownership::Seeded), property("2", Ownership::Seeded)],
            vec![],
            vec![],
        );
        let ids: Vec<&str> = favorites.resolve(&store).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
