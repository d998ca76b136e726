// src/import/seed.rs

use crate::db::connection::Database;
use crate::db::properties::insert_many;
use crate::domain::property::PropertyDetails;
use crate::errors::ServerError;

struct Sample {
    name: &'static str,
    location: &'static str,
    sub_location: &'static str,
    address: &'static str,
    phone: &'static str,
    rating: f64,
    reviews: u32,
    maps: &'static str,
    photo: &'static str,
    category: &'static str,
    amenities: &'static str,
    tariff: &'static str,
    source: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Mountain View Resort",
        location: "Darjeeling",
        sub_location: "Mall Road",
        address: "Mall Road, Darjeeling, West Bengal 734101",
        phone: "+91 9876543210",
        rating: 4.5,
        reviews: 245,
        maps: "https://maps.google.com/?q=Darjeeling+Mall+Road",
        photo: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=800",
        category: "Resort",
        amenities: "Free WiFi, Swimming Pool, Restaurant, Parking, Room Service, Mountain View",
        tariff: "₹3,500 - ₹5,000 per night",
        source: "https://example.com/mountain-view-resort",
    },
    Sample {
        name: "Tea Garden Homestay",
        location: "Darjeeling",
        sub_location: "Happy Valley",
        address: "Happy Valley Tea Estate, Darjeeling, West Bengal 734102",
        phone: "+91 9876543211",
        rating: 4.2,
        reviews: 89,
        maps: "https://maps.google.com/?q=Happy+Valley+Tea+Estate+Darjeeling",
        photo: "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=800",
        category: "Homestay",
        amenities: "Free WiFi, Tea Garden Tour, Organic Meals, Parking, Garden View",
        tariff: "₹2,000 - ₹3,000 per night",
        source: "https://example.com/tea-garden-homestay",
    },
    Sample {
        name: "Riverside Cottage",
        location: "Kalimpong",
        sub_location: "Delo Hill",
        address: "Delo Hill, Kalimpong, West Bengal 734301",
        phone: "+91 9876543212",
        rating: 4.7,
        reviews: 156,
        maps: "https://maps.google.com/?q=Delo+Hill+Kalimpong",
        photo: "https://images.unsplash.com/photo-1587061949409-02df41d5e562?w=800",
        category: "Homestay",
        amenities: "Free WiFi, River View, Bonfire, Trekking Guide, Home Cooked Meals",
        tariff: "₹1,800 - ₹2,500 per night",
        source: "https://example.com/riverside-cottage",
    },
    Sample {
        name: "Himalayan Heights Resort",
        location: "Darjeeling",
        sub_location: "Tiger Hill",
        address: "Tiger Hill Road, Darjeeling, West Bengal 734104",
        phone: "+91 9876543213",
        rating: 4.8,
        reviews: 312,
        maps: "https://maps.google.com/?q=Tiger+Hill+Darjeeling",
        photo: "https://images.unsplash.com/photo-1571003123894-1f0594d2b5d9?w=800",
        category: "Resort",
        amenities: "Free WiFi, Spa, Restaurant, Gym, Conference Hall, Sunrise View, Parking",
        tariff: "₹4,500 - ₹7,000 per night",
        source: "https://example.com/himalayan-heights",
    },
    Sample {
        name: "Valley View Homestay",
        location: "Kalimpong",
        sub_location: "Durpin Hill",
        address: "Durpin Hill, Kalimpong, West Bengal 734302",
        phone: "+91 9876543214",
        rating: 4.3,
        reviews: 78,
        maps: "https://maps.google.com/?q=Durpin+Hill+Kalimpong",
        photo: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800",
        category: "Homestay",
        amenities: "Free WiFi, Valley View, Local Cuisine, Parking, Nature Walks",
        tariff: "₹1,500 - ₹2,200 per night",
        source: "https://example.com/valley-view-homestay",
    },
    Sample {
        name: "Forest Edge Resort",
        location: "Dooars",
        sub_location: "Lataguri",
        address: "Lataguri Forest, Dooars, West Bengal 735219",
        phone: "+91 9876543215",
        rating: 4.6,
        reviews: 198,
        maps: "https://maps.google.com/?q=Lataguri+Dooars",
        photo: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800",
        category: "Resort",
        amenities: "Free WiFi, Wildlife Safari, Restaurant, Parking, Forest View, Bird Watching",
        tariff: "₹3,200 - ₹4,800 per night",
        source: "https://example.com/forest-edge-resort",
    },
    Sample {
        name: "River Bend Homestay",
        location: "Dooars",
        sub_location: "Jayanti",
        address: "Jayanti River, Dooars, West Bengal 735220",
        phone: "+91 9876543216",
        rating: 4.4,
        reviews: 134,
        maps: "https://maps.google.com/?q=Jayanti+River+Dooars",
        photo: "https://images.unsplash.com/photo-1586500036706-41963de24d8b?w=800",
        category: "Homestay",
        amenities: "Free WiFi, River Side, Fishing, Local Food, Nature Walks, Parking",
        tariff: "₹2,200 - ₹3,200 per night",
        source: "https://example.com/river-bend-homestay",
    },
    Sample {
        name: "Cloud Nine Resort",
        location: "Darjeeling",
        sub_location: "Ghoom",
        address: "Ghoom Monastery Road, Darjeeling, West Bengal 734103",
        phone: "+91 9876543217",
        rating: 4.1,
        reviews: 67,
        maps: "https://maps.google.com/?q=Ghoom+Darjeeling",
        photo: "https://images.unsplash.com/photo-1564501049412-61c2a3083791?w=800",
        category: "Resort",
        amenities: "Free WiFi, Mountain View, Restaurant, Parking, Monastery Visit, Room Service",
        tariff: "₹2,800 - ₹4,200 per night",
        source: "https://example.com/cloud-nine-resort",
    },
    Sample {
        name: "Pine Valley Homestay",
        location: "Kalimpong",
        sub_location: "Lava",
        address: "Lava Village, Kalimpong, West Bengal 734314",
        phone: "+91 9876543218",
        rating: 4.9,
        reviews: 423,
        maps: "https://maps.google.com/?q=Lava+Village+Kalimpong",
        photo: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
        category: "Homestay",
        amenities: "Free WiFi, Forest View, Trekking, Bird Watching, Local Cuisine, Bonfire",
        tariff: "₹2,500 - ₹3,500 per night",
        source: "https://example.com/pine-valley-homestay",
    },
    Sample {
        name: "Elephant Camp Resort",
        location: "Dooars",
        sub_location: "Gorumara",
        address: "Gorumara National Park, Dooars, West Bengal 735221",
        phone: "+91 9876543219",
        rating: 4.0,
        reviews: 189,
        maps: "https://maps.google.com/?q=Gorumara+National+Park",
        photo: "https://images.unsplash.com/photo-1549366021-9f761d040a94?w=800",
        category: "Resort",
        amenities: "Free WiFi, Wildlife Safari, Elephant Ride, Restaurant, Parking, Nature Guide",
        tariff: "₹3,800 - ₹5,500 per night",
        source: "https://example.com/elephant-camp-resort",
    },
];

/// The demo catalogue: hill-station and forest listings in North Bengal.
pub fn sample_catalogue() -> Vec<PropertyDetails> {
    SAMPLES
        .iter()
        .map(|s| PropertyDetails {
            homestay_name: s.name.into(),
            location: s.location.into(),
            sub_location: s.sub_location.into(),
            google_address: s.address.into(),
            google_phone: s.phone.into(),
            google_rating: s.rating,
            number_of_reviews: s.reviews,
            google_maps_link: s.maps.into(),
            photo_url: s.photo.into(),
            category: s.category.into(),
            amenities: s.amenities.into(),
            tariff: s.tariff.into(),
            source_url: Some(s.source.into()),
            youtube_video: None,
        })
        .collect()
}

/// Replaces the whole collection with the demo catalogue.
pub fn seed(db: &Database) -> Result<usize, ServerError> {
    let catalogue = sample_catalogue();
    let inserted = db.with_conn(|conn| insert_many(conn, &catalogue, true))?;
    tracing::info!(inserted, "database seeded");
    Ok(inserted)
}
