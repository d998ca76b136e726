use crate::domain::locations::LocationSummary;
use crate::import::seed::seed;
use crate::router::handle;
use crate::tests::utils::{body_json, init_test_db, insert, listing, request};
use http::Method;
use serde_json::json;

fn locations(db: &crate::db::connection::Database) -> Vec<LocationSummary> {
    let resp = handle(request(Method::GET, "/api/locations"), db).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    serde_json::from_value(body_json(resp)).expect("locations payload shape")
}

#[test]
fn seeded_catalogue_rolls_up_by_location() {
    let db = init_test_db();
    seed(&db).unwrap();

    let resp = handle(request(Method::GET, "/api/locations"), &db).unwrap();
    let body = body_json(resp);

    assert_eq!(
        body[0],
        json!({
            "location": "Darjeeling",
            "count": 4,
            "sub_locations": [
                { "Mall Road": 1 },
                { "Happy Valley": 1 },
                { "Tiger Hill": 1 },
                { "Ghoom": 1 }
            ]
        })
    );
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[test]
fn repeated_sub_locations_fold_in_first_seen_order() {
    let db = init_test_db();
    insert(&db, listing("One", "Sikkim", "A", "Homestay", 4.0, 1));
    insert(&db, listing("Two", "Sikkim", "B", "Homestay", 4.0, 1));
    insert(&db, listing("Three", "Sikkim", "A", "Homestay", 4.0, 1));

    let out = locations(&db);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].count, 3);

    let buckets: Vec<_> = out[0]
        .sub_locations
        .iter()
        .map(|b| (b.name.as_str(), b.count))
        .collect();
    assert_eq!(buckets, [("A", 2), ("B", 1)]);
}

#[test]
fn totals_match_store_and_follow_mutations() {
    let db = init_test_db();
    seed(&db).unwrap();
    let extra = insert(&db, listing("Lakeside", "Mirik", "", "Homestay", 3.9, 12));

    let out = locations(&db);
    assert_eq!(out.iter().map(|s| s.count).sum::<u64>(), 11);
    let mirik = out.iter().find(|s| s.location == "Mirik").unwrap();
    assert_eq!(mirik.sub_locations[0].name, "");

    let uri = format!("/api/admin/properties/{}", extra.id);
    handle(request(Method::DELETE, &uri), &db).unwrap();

    let out = locations(&db);
    assert_eq!(out.iter().map(|s| s.count).sum::<u64>(), 10);
    assert!(out.iter().all(|s| s.location != "Mirik"));
}

#[test]
fn empty_store_has_no_locations() {
    let db = init_test_db();
    assert!(locations(&db).is_empty());
}
