use crate::models::{Contact, Coordinates, ListingType, Ownership, Property, PropertyType};

/// Demonstration listings bundled with the app.
/// Always shown first and never editable.
pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            ownership: Ownership::Seeded,
            title: "Modern 3-Bedroom HDB in Punggol".to_string(),
            description: "Beautifully renovated 3-bedroom HDB flat with modern finishes. Bright and airy living spaces with a functional layout. Close to Punggol MRT station and Waterway Point mall.".to_string(),
            price: 550_000.0,
            listing_type: ListingType::Sale,
            property_type: PropertyType::Hdb,
            bedrooms: 3,
            bathrooms: 2,
            size: 1100.0,
            location: "Punggol".to_string(),
            address: "123 Punggol Field, #12-34, Singapore 820123".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Renovated in 2021".to_string(),
                "Smart home features".to_string(),
                "Built-in wardrobes".to_string(),
                "Kitchen island".to_string(),
            ],
            amenities: vec![
                "Playground".to_string(),
                "Covered parking".to_string(),
                "BBQ pits".to_string(),
                "Basketball court".to_string(),
            ],
            contact: Contact {
                name: "John Tan".to_string(),
                phone: "9123 4567".to_string(),
                email: "john.tan@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.4043,
                lng: 103.9092,
            },
        },
        Property {
            id: "2".to_string(),
            ownership: Ownership::Seeded,
            title: "Luxurious Condo with City View".to_string(),
            description: "Stunning high-floor condo with panoramic city views. This 2-bedroom unit features premium finishes, a spacious balcony, and resort-style facilities. Walking distance to Orchard MRT.".to_string(),
            price: 2_800.0,
            listing_type: ListingType::Rent,
            property_type: PropertyType::Condo,
            bedrooms: 2,
            bathrooms: 2,
            size: 950.0,
            location: "Orchard".to_string(),
            address: "456 Orchard Road, #18-05, Singapore 238877".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1567767292278-a4f21aa2d36e?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Marble flooring".to_string(),
                "Floor-to-ceiling windows".to_string(),
                "Fully furnished".to_string(),
                "Smart home system".to_string(),
            ],
            amenities: vec![
                "Infinity pool".to_string(),
                "Gym".to_string(),
                "Tennis court".to_string(),
                "BBQ area".to_string(),
                "Concierge service".to_string(),
            ],
            contact: Contact {
                name: "Sarah Lim".to_string(),
                phone: "8765 4321".to_string(),
                email: "sarah.lim@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.3043,
                lng: 103.8318,
            },
        },
        Property {
            id: "3".to_string(),
            ownership: Ownership::Seeded,
            title: "Spacious Landed House in Sengkang".to_string(),
            description: "Beautiful semi-detached house with a garden and private pool. This family home features 5 bedrooms, a modern kitchen, and a cozy living area. Perfect for large families.".to_string(),
            price: 3_500_000.0,
            listing_type: ListingType::Sale,
            property_type: PropertyType::Landed,
            bedrooms: 5,
            bathrooms: 4,
            size: 3200.0,
            location: "Sengkang".to_string(),
            address: "789 Sengkang East Road, Singapore 545789".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Private swimming pool".to_string(),
                "Landscaped garden".to_string(),
                "Gourmet kitchen".to_string(),
                "Home theater".to_string(),
                "Helper's quarters".to_string(),
            ],
            amenities: vec![
                "Private driveway".to_string(),
                "Security system".to_string(),
                "Outdoor dining area".to_string(),
            ],
            contact: Contact {
                name: "Michael Wong".to_string(),
                phone: "9876 5432".to_string(),
                email: "michael.wong@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.3868,
                lng: 103.8914,
            },
        },
        Property {
            id: "4".to_string(),
            ownership: Ownership::Seeded,
            title: "Cozy 2-Room HDB in Yishun".to_string(),
            description: "Affordable and well-maintained 2-room HDB flat. Ideal for singles or young couples. Recently painted with new flooring. Near Yishun MRT and Northpoint City.".to_string(),
            price: 280_000.0,
            listing_type: ListingType::Sale,
            property_type: PropertyType::Hdb,
            bedrooms: 1,
            bathrooms: 1,
            size: 450.0,
            location: "Yishun".to_string(),
            address: "101 Yishun Ring Road, #05-123, Singapore 760101".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1588854337236-6889d631faa8?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "New flooring".to_string(),
                "Built-in wardrobe".to_string(),
                "Air conditioning".to_string(),
                "Water heater".to_string(),
            ],
            amenities: vec![
                "Playground".to_string(),
                "Fitness corner".to_string(),
                "Void deck".to_string(),
            ],
            contact: Contact {
                name: "Lisa Ng".to_string(),
                phone: "9234 5678".to_string(),
                email: "lisa.ng@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.4304,
                lng: 103.8354,
            },
        },
        Property {
            id: "5".to_string(),
            ownership: Ownership::Seeded,
            title: "Executive Condo in Sengkang".to_string(),
            description: "Spacious executive condominium with excellent facilities. This 4-bedroom unit is perfect for families with children. Close to Sengkang MRT, bus interchange, and Compass One mall.".to_string(),
            price: 1_200_000.0,
            listing_type: ListingType::Sale,
            property_type: PropertyType::Condo,
            bedrooms: 4,
            bathrooms: 3,
            size: 1400.0,
            location: "Sengkang".to_string(),
            address: "222 Sengkang East Way, #10-11, Singapore 544222".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1554995207-c18c203602cb?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1617806118233-18e1de247200?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1589834390005-5d4fb9bf3d32?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Balcony".to_string(),
                "Study room".to_string(),
                "Wet and dry kitchen".to_string(),
                "Walk-in wardrobe".to_string(),
            ],
            amenities: vec![
                "Swimming pool".to_string(),
                "Tennis court".to_string(),
                "Children's playground".to_string(),
                "Function room".to_string(),
                "BBQ pits".to_string(),
            ],
            contact: Contact {
                name: "David Tan".to_string(),
                phone: "8234 5678".to_string(),
                email: "david.tan@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.3868,
                lng: 103.8914,
            },
        },
        Property {
            id: "6".to_string(),
            ownership: Ownership::Seeded,
            title: "Renovated 4-Room HDB in Punggol".to_string(),
            description: "Beautifully renovated 4-room HDB with premium finishes. Features an open-concept kitchen and custom cabinetry throughout. Located near Punggol Waterway and Punggol MRT.".to_string(),
            price: 1_600.0,
            listing_type: ListingType::Rent,
            property_type: PropertyType::Hdb,
            bedrooms: 3,
            bathrooms: 2,
            size: 1000.0,
            location: "Punggol".to_string(),
            address: "456 Punggol Drive, #08-456, Singapore 820456".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1484101403633-562f891dc89a?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1586105251261-72a756497a11?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Open-concept kitchen".to_string(),
                "Custom cabinetry".to_string(),
                "Air conditioning in all rooms".to_string(),
                "Utility room".to_string(),
            ],
            amenities: vec![
                "Playground".to_string(),
                "Fitness corner".to_string(),
                "Bicycle parking".to_string(),
            ],
            contact: Contact {
                name: "Rachel Lim".to_string(),
                phone: "9345 6789".to_string(),
                email: "rachel.lim@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.4043,
                lng: 103.9092,
            },
        },
        Property {
            id: "7".to_string(),
            ownership: Ownership::Seeded,
            title: "Penthouse Condo with Private Roof Terrace".to_string(),
            description: "Exclusive penthouse with a private roof terrace offering panoramic city views. This 3-bedroom duplex features high ceilings, premium appliances, and luxurious finishes throughout.".to_string(),
            price: 6_500.0,
            listing_type: ListingType::Rent,
            property_type: PropertyType::Condo,
            bedrooms: 3,
            bathrooms: 3,
            size: 2200.0,
            location: "Orchard".to_string(),
            address: "789 Orchard Boulevard, #30-01, Singapore 248789".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600585154526-990dced4db0d?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600121848594-d8644e57abab?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Private roof terrace".to_string(),
                "Floor-to-ceiling windows".to_string(),
                "Designer kitchen".to_string(),
                "Wine cellar".to_string(),
                "Smart home system".to_string(),
            ],
            amenities: vec![
                "Infinity pool".to_string(),
                "Sky garden".to_string(),
                "Private gym".to_string(),
                "Concierge service".to_string(),
                "Private lift access".to_string(),
            ],
            contact: Contact {
                name: "Benjamin Koh".to_string(),
                phone: "8456 7890".to_string(),
                email: "benjamin.koh@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.3043,
                lng: 103.8318,
            },
        },
        Property {
            id: "8".to_string(),
            ownership: Ownership::Seeded,
            title: "Corner Terrace House in Yishun".to_string(),
            description: "Charming corner terrace house with a spacious garden. Recently renovated with modern interiors while preserving its classic charm. Near to Yishun Park and amenities.".to_string(),
            price: 2_800_000.0,
            listing_type: ListingType::Sale,
            property_type: PropertyType::Landed,
            bedrooms: 4,
            bathrooms: 3,
            size: 2800.0,
            location: "Yishun".to_string(),
            address: "123 Yishun Avenue 1, Singapore 768123".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1568605114967-8130f3a36994?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?auto=format&fit=crop&w=1170&q=80".to_string(),
                "https://images.unsplash.com/photo-1600210492493-0946911123ea?auto=format&fit=crop&w=1170&q=80".to_string(),
            ],
            features: vec![
                "Corner plot".to_string(),
                "Garden".to_string(),
                "Car porch for 2 cars".to_string(),
                "Renovated kitchen".to_string(),
                "Attic space".to_string(),
            ],
            amenities: vec![
                "Near park".to_string(),
                "Quiet neighborhood".to_string(),
                "Freehold".to_string(),
            ],
            contact: Contact {
                name: "Thomas Lee".to_string(),
                phone: "9567 8901".to_string(),
                email: "thomas.lee@example.com".to_string(),
            },
            coordinates: Coordinates {
                lat: 1.4304,
                lng: 103.8354,
            },
        },
    ]
}
