use crate::error::{HunterError, Result};
use crate::models::{Ownership, Property, User};
use crate::store::PropertyStore;

/// Whether `user` may edit the listing with `property_id`
pub fn can_edit(store: &PropertyStore, property_id: &str, user: Option<&User>) -> bool {
    authorize_edit(store, property_id, user).is_ok()
}

/// Whether `user` may delete the listing with `property_id`
pub fn can_delete(store: &PropertyStore, property_id: &str, user: Option<&User>) -> bool {
    authorize_delete(store, property_id, user).is_ok()
}

/// Resolve the listing `user` wants to edit, or say why they can't
pub fn authorize_edit<'a>(
    store: &'a PropertyStore,
    property_id: &str,
    user: Option<&User>,
) -> Result<&'a Property> {
    authorize(store, property_id, user)
}

/// Same rules as editing for now
pub fn authorize_delete<'a>(
    store: &'a PropertyStore,
    property_id: &str,
    user: Option<&User>,
) -> Result<&'a Property> {
    authorize(store, property_id, user)
}

fn authorize<'a>(
    store: &'a PropertyStore,
    property_id: &str,
    user: Option<&User>,
) -> Result<&'a Property> {
    let user = user.ok_or(HunterError::NotAuthenticated)?;
    let property = store
        .get(property_id)
        .ok_or_else(|| HunterError::NotFound(property_id.to_string()))?;

    let permitted = match &property.ownership {
        Ownership::Managed { owner_id } => *owner_id == user.id,
        Ownership::Legacy => true,
        Ownership::Seeded => false,
    };

    if permitted {
        Ok(property)
    } else {
        Err(HunterError::NotAuthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{managed, property, user};

    fn store() -> PropertyStore {
        PropertyStore::from_parts(
            vec![property("1", Ownership::Seeded)],
            vec![property("custom-7", Ownership::Legacy)],
            vec![managed("m1", "agent-1")],
        )
    }

    #[test]
    fn nobody_signed_in_can_change_nothing() {
        let store = store();
        for id in ["1", "custom-7", "m1"] {
            assert!(!can_edit(&store, id, None));
            assert!(!can_delete(&store, id, None));
        }
        assert_eq!(
            authorize_edit(&store, "m1", None).unwrap_err(),
            HunterError::NotAuthenticated
        );
    }

    #[test]
    fn managed_listing_belongs_to_its_owner_only() {
        let store = store();
        let owner = user("agent-1");
        let other = user("agent-2");

        assert!(can_edit(&store, "m1", Some(&owner)));
        assert!(can_delete(&store, "m1", Some(&owner)));
        assert!(!can_edit(&store, "m1", Some(&other)));
        assert_eq!(
            authorize_delete(&store, "m1", Some(&other)).unwrap_err(),
            HunterError::NotAuthorized
        );
    }

    #[test]
    fn seed_listing_is_read_only_for_everyone() {
        let store = store();
        for id in ["agent-1", "agent-2", "hunter-9"] {
            assert!(!can_edit(&store, "1", Some(&user(id))));
            assert!(!can_delete(&store, "1", Some(&user(id))));
        }
    }

    #[test]
    fn legacy_listing_is_open_to_any_signed_in_user() {
        let store = store();
        assert!(can_edit(&store, "custom-7", Some(&user("anyone"))));
        assert!(can_delete(&store, "custom-7", Some(&user("someone-else"))));
    }

    #[test]
    fn unknown_listing_is_denied() {
        let store = store();
        let owner = user("agent-1");
        assert!(!can_edit(&store, "missing", Some(&owner)));
        assert_eq!(
            authorize_edit(&store, "missing", Some(&owner)).unwrap_err(),
            HunterError::NotFound("missing".to_string())
        );
    }
}
