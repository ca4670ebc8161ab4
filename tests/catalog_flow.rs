use property_hunter::remote::MemoryCollection;
use property_hunter::storage::{JsonFileStorage, KeyValueStorage, MemoryStorage, SharedStorage};
use property_hunter::{
    App, FilterUpdate, HunterError, ListingFilter, ListingType, PropertyDraft, PropertyType,
    PropertyUpdate, RequestState, SortOption, User, UserType,
};
use std::sync::Arc;
use std::time::Duration;

fn agent(id: &str) -> User {
    User {
        id: id.to_string(),
        name: format!("Agent {id}"),
        email: format!("{id}@agency.sg"),
        user_type: UserType::Agent,
        phone: Some("98765432".to_string()),
        agent_license: Some("R012345A".to_string()),
    }
}

fn draft(title: &str, price: f64) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        description: "Freshly renovated, near the MRT".to_string(),
        price,
        listing_type: ListingType::Sale,
        property_type: PropertyType::Condo,
        bedrooms: 2,
        bathrooms: 2,
        size: 850.0,
        location: "Bishan".to_string(),
        address: "5 Bishan Street 21".to_string(),
        images: vec!["https://img.example/condo.jpg".to_string()],
        features: vec![],
        amenities: vec!["Gym".to_string()],
        contact: None,
        coordinates: None,
    }
}

fn app(remote: &Arc<MemoryCollection>, storage: &SharedStorage) -> App {
    App::new(remote.clone(), storage.clone(), Duration::from_secs(1)).unwrap()
}

#[tokio::test]
async fn agent_publishes_edits_and_removes_a_listing() {
    let remote = Arc::new(MemoryCollection::new());
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    let mut app = app(&remote, &storage);
    app.catalog.load().await;

    let anonymous = app.add_property(draft("Bishan condo", 1_100_000.0)).await;
    assert_eq!(anonymous, Err(HunterError::NotAuthenticated));

    app.sign_in(agent("a1")).unwrap();
    let created = app.add_property(draft("Bishan condo", 1_100_000.0)).await.unwrap();
    assert_eq!(created.contact.email, "a1@agency.sg");

    app.catalog.update_filters(FilterUpdate {
        locations: Some(vec!["Bishan".to_string()]),
        ..Default::default()
    });
    assert_eq!(app.catalog.filtered().len(), 1);

    let updated = app
        .update_property(
            &created.id,
            PropertyUpdate {
                price: Some(1_050_000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 1_050_000.0);
    assert_eq!(updated.title, "Bishan condo");

    // A fresh session sees what the first one published
    let mut other = self::app(&remote, &storage);
    other.catalog.load().await;
    assert_eq!(other.catalog.get(&created.id).unwrap().price, 1_050_000.0);
    assert!(other.catalog.can_edit(&created.id, Some(&agent("a1"))));
    assert!(!other.catalog.can_edit(&created.id, Some(&agent("a2"))));

    assert!(app.delete_property(&created.id).await.unwrap());
    assert!(app.catalog.get(&created.id).is_none());
    other.catalog.refresh().await;
    assert!(other.catalog.get(&created.id).is_none());
}

#[tokio::test]
async fn anonymous_edit_of_legacy_listing_changes_nothing() {
    let remote = Arc::new(MemoryCollection::new());
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    storage
        .set(
            "properties",
            r#"[{"id":"custom-99","title":"Old flat","description":"Kept from before",
                "price":400000,"listingType":"sale","propertyType":"hdb","bedrooms":3,
                "bathrooms":2,"size":950,"location":"Bedok","address":"10 Bedok North",
                "images":["https://img.example/old.jpg"],"features":[],"amenities":[],
                "contactName":"Owner","contactPhone":"90000000","contactEmail":"o@example.com"}]"#,
        )
        .unwrap();

    let mut app = app(&remote, &storage);
    app.catalog.load().await;
    let before = app.catalog.store().clone();

    let result = app
        .update_property(
            "custom-99",
            PropertyUpdate {
                price: Some(1000.0),
                ..Default::default()
            },
        )
        .await;

    assert_eq!(result, Err(HunterError::NotAuthenticated));
    assert_eq!(app.catalog.store().all(), before.all());
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn browsing_survives_an_unreachable_collection() {
    let remote = Arc::new(MemoryCollection::new());
    remote.set_failing(true);
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    let mut app = app(&remote, &storage);

    app.catalog.load().await;
    assert_eq!(
        app.catalog.state(),
        &RequestState::Failed("Failed to load properties".to_string())
    );

    app.catalog.update_filters(FilterUpdate {
        listing_type: Some(ListingFilter::Rent),
        ..Default::default()
    });
    app.catalog.set_sort(SortOption::PriceAsc);
    let prices: Vec<f64> = app.catalog.filtered().iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1600.0, 2800.0, 6500.0]);
}

#[tokio::test]
async fn session_and_preferences_persist_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hunter.json");
    let remote = Arc::new(MemoryCollection::new());

    {
        let storage: SharedStorage = Arc::new(JsonFileStorage::open(&path).unwrap());
        let mut app = app(&remote, &storage);
        app.sign_in(agent("a1")).unwrap();
        app.favorites.add("3").unwrap();
        app.preferences.toggle_theme().unwrap();
    }

    let storage: SharedStorage = Arc::new(JsonFileStorage::open(&path).unwrap());
    let mut app = app(&remote, &storage);
    app.catalog.load().await;

    assert_eq!(app.user().map(|u| u.id.as_str()), Some("a1"));
    assert_eq!(app.favorite_properties()[0].id, "3");
    assert_eq!(app.preferences.theme(), property_hunter::Theme::Dark);
}
