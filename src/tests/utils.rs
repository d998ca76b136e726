use crate::db::connection::{init_db, Database};
use crate::db::properties::create_property;
use crate::domain::property::{PropertyDetails, PropertyRecord};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// A fresh database file that lives as long as the handle.
pub struct TestDb {
    db: Database,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = Database::new(dir.path().join("test_db.sqlite"));

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestDb { db, _dir: dir }
}

pub fn listing(
    name: &str,
    location: &str,
    sub_location: &str,
    category: &str,
    rating: f64,
    reviews: u32,
) -> PropertyDetails {
    PropertyDetails {
        homestay_name: name.into(),
        location: location.into(),
        sub_location: sub_location.into(),
        google_address: format!("{sub_location}, {location}"),
        google_phone: "+91 9876543210".into(),
        google_rating: rating,
        number_of_reviews: reviews,
        google_maps_link: "https://maps.google.com/?q=test".into(),
        photo_url: "https://images.example.com/p.jpg".into(),
        category: category.into(),
        amenities: "Free WiFi, Parking".into(),
        tariff: "₹2,000 - ₹3,000 per night".into(),
        source_url: None,
        youtube_video: None,
    }
}

pub fn insert(db: &Database, details: PropertyDetails) -> PropertyRecord {
    db.with_conn(|conn| create_property(conn, &details))
        .expect("Failed to insert property")
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_json(resp: Response) -> Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("body is not JSON ({e}): {body}"))
}
