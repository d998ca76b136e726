use crate::import::seed::seed;
use crate::router::handle;
use crate::tests::utils::{body_json, init_test_db, insert, listing, request};
use http::Method;
use serde_json::json;

#[test]
fn short_or_missing_query_rejected() {
    let db = init_test_db();

    let err = handle(request(Method::GET, "/api/search-suggestions?query=go"), &db).unwrap_err();
    assert_eq!(err.status(), 422);

    let err = handle(request(Method::GET, "/api/search-suggestions"), &db).unwrap_err();
    assert_eq!(err.status(), 422);
}

#[test]
fn location_query_returns_location_and_sub_locations() {
    let db = init_test_db();
    seed(&db).unwrap();

    let resp = handle(request(Method::GET, "/api/search-suggestions?query=darj"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    // No names contain "darj"; the first three Darjeeling rows supply places.
    assert_eq!(
        body_json(resp),
        json!([
            { "text": "Darjeeling", "type": "location" },
            { "text": "Mall Road", "type": "sub_location" },
            { "text": "Happy Valley", "type": "sub_location" },
            { "text": "Tiger Hill", "type": "sub_location" }
        ])
    );
}

#[test]
fn names_come_first_then_places() {
    let db = init_test_db();
    seed(&db).unwrap();

    let body = body_json(handle(request(Method::GET, "/api/search-suggestions?query=valley"), &db).unwrap());
    assert_eq!(
        body,
        json!([
            { "text": "Valley View Homestay", "type": "property" },
            { "text": "Pine Valley Homestay", "type": "property" },
            { "text": "Darjeeling", "type": "location" },
            { "text": "Happy Valley", "type": "sub_location" }
        ])
    );
}

#[test]
fn list_is_capped_and_deduplicated() {
    let db = init_test_db();
    seed(&db).unwrap();

    let body = body_json(handle(request(Method::GET, "/api/search-suggestions?query=HILL"), &db).unwrap());
    assert_eq!(
        body,
        json!([
            { "text": "Kalimpong", "type": "location" },
            { "text": "Delo Hill", "type": "sub_location" },
            { "text": "Darjeeling", "type": "location" },
            { "text": "Tiger Hill", "type": "sub_location" },
            { "text": "Durpin Hill", "type": "sub_location" }
        ])
    );
}

#[test]
fn name_and_place_with_same_text_appear_once() {
    let db = init_test_db();
    insert(&db, listing("Goa Beach", "Goa Beach", "Goa Beach", "Resort", 4.0, 1));

    let body = body_json(handle(request(Method::GET, "/api/search-suggestions?query=goa"), &db).unwrap());
    assert_eq!(body, json!([{ "text": "Goa Beach", "type": "property" }]));
}

#[test]
fn accented_query_matches_regardless_of_case() {
    let db = init_test_db();
    insert(&db, listing("Éden Homestay", "Öland", "Ärla", "Homestay", 4.2, 12));

    let body = body_json(handle(request(Method::GET, "/api/search-suggestions?query=%C3%A4rla"), &db).unwrap());
    assert_eq!(
        body,
        json!([
            { "text": "Öland", "type": "location" },
            { "text": "Ärla", "type": "sub_location" }
        ])
    );

    let body = body_json(handle(request(Method::GET, "/api/search-suggestions?query=%C3%89DEN"), &db).unwrap());
    assert_eq!(body, json!([{ "text": "Éden Homestay", "type": "property" }]));
}
