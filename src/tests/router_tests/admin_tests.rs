use crate::domain::property::{PropertyDetails, PropertyRecord};
use crate::router::handle;
use crate::tests::utils::{body_json, init_test_db, json_request, listing, request};
use astra::Body;
use http::Method;
use serde_json::json;

fn create(db: &crate::db::connection::Database, details: &PropertyDetails) -> PropertyRecord {
    let body = serde_json::to_value(details).unwrap();
    let resp = handle(json_request(Method::POST, "/api/admin/properties", &body), db)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    serde_json::from_value(body_json(resp)).unwrap()
}

#[test]
fn create_then_get_returns_same_fields() {
    let db = init_test_db();
    let mut details = listing("Forest Edge Resort", "Dooars", "Lataguri", "Resort", 4.6, 198);
    details.youtube_video = Some("https://youtu.be/forest".into());

    let created = create(&db, &details);
    assert_eq!(created.details, details);
    assert_eq!(created.created_at, created.updated_at);

    let uri = format!("/api/properties/{}", created.id);
    let fetched: PropertyRecord =
        serde_json::from_value(body_json(handle(request(Method::GET, &uri), &db).unwrap())).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_ignores_client_supplied_id_and_timestamps() {
    let db = init_test_db();
    let mut body = serde_json::to_value(listing("Cloud Nine Resort", "Darjeeling", "Ghoom", "Resort", 4.1, 67)).unwrap();
    body["_id"] = json!("64b7f0c2e1a9d3b4c5d6e7f8");
    body["created_at"] = json!("2001-01-01T00:00:00Z");

    let resp = handle(json_request(Method::POST, "/api/admin/properties", &body), &db).unwrap();
    let record: PropertyRecord = serde_json::from_value(body_json(resp)).unwrap();
    assert_ne!(record.id.as_str(), "64b7f0c2e1a9d3b4c5d6e7f8");
    assert!(record.created_at.timestamp() > 978_307_200);
}

#[test]
fn create_rejects_bad_bodies() {
    let db = init_test_db();

    // missing required fields
    let err = handle(
        json_request(Method::POST, "/api/admin/properties", &json!({ "homestay_name": "x" })),
        &db,
    )
    .unwrap_err();
    assert_eq!(err.status(), 422);

    // negative review count
    let mut body = serde_json::to_value(listing("x", "y", "z", "Homestay", 4.0, 1)).unwrap();
    body["number_of_reviews"] = json!(-5);
    let err = handle(json_request(Method::POST, "/api/admin/properties", &body), &db).unwrap_err();
    assert_eq!(err.status(), 422);

    // rating off the scale
    body["number_of_reviews"] = json!(5);
    body["google_rating"] = json!(9.5);
    let err = handle(json_request(Method::POST, "/api/admin/properties", &body), &db).unwrap_err();
    assert_eq!(err.status(), 422);

    // not JSON at all
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/api/admin/properties")
        .body(Body::from("homestay_name=x"))
        .unwrap();
    assert_eq!(handle(req, &db).unwrap_err().status(), 422);
}

#[test]
fn replace_overwrites_fields_but_keeps_identity() {
    let db = init_test_db();
    let created = create(&db, &listing("Valley View Homestay", "Kalimpong", "Durpin Hill", "Homestay", 4.3, 78));

    let mut updated = listing("Valley View Retreat", "Kalimpong", "Durpin Hill", "Resort", 4.4, 80);
    updated.source_url = Some("https://example.com/valley-view".into());

    let uri = format!("/api/admin/properties/{}", created.id);
    let resp = handle(
        json_request(Method::PUT, &uri, &serde_json::to_value(&updated).unwrap()),
        &db,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let record: PropertyRecord = serde_json::from_value(body_json(resp)).unwrap();
    assert_eq!(record.id, created.id);
    assert_eq!(record.created_at, created.created_at);
    assert!(record.updated_at >= created.updated_at);
    assert_eq!(record.details, updated);
}

#[test]
fn replace_clears_optional_fields_left_out() {
    let db = init_test_db();
    let mut details = listing("River Bend Homestay", "Dooars", "Jayanti", "Homestay", 4.4, 134);
    details.source_url = Some("https://example.com/river-bend".into());
    let created = create(&db, &details);

    let mut body = serde_json::to_value(&details).unwrap();
    body.as_object_mut().unwrap().remove("source_url");

    let uri = format!("/api/admin/properties/{}", created.id);
    let resp = handle(json_request(Method::PUT, &uri, &body), &db).unwrap();
    assert_eq!(body_json(resp)["source_url"], json!(null));
}

#[test]
fn replace_unknown_or_malformed_id() {
    let db = init_test_db();
    let body = serde_json::to_value(listing("x", "y", "z", "Homestay", 4.0, 1)).unwrap();

    let err = handle(
        json_request(Method::PUT, "/api/admin/properties/64b7f0c2e1a9d3b4c5d6e7f8", &body),
        &db,
    )
    .unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(json_request(Method::PUT, "/api/admin/properties/123", &body), &db).unwrap_err();
    assert_eq!(err.status(), 400);
}

#[test]
fn delete_then_get_is_not_found() {
    let db = init_test_db();
    let created = create(&db, &listing("Elephant Camp Resort", "Dooars", "Gorumara", "Resort", 4.0, 189));

    let admin_uri = format!("/api/admin/properties/{}", created.id);
    let resp = handle(request(Method::DELETE, &admin_uri), &db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!({ "message": "Property deleted successfully" }));

    let err = handle(request(Method::GET, &format!("/api/properties/{}", created.id)), &db).unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(request(Method::DELETE, &admin_uri), &db).unwrap_err();
    assert_eq!(err.status(), 404);
}
