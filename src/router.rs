use crate::db::connection::Database;
use crate::db::properties;
use crate::domain::property::{PropertyDetails, PropertyId};
use crate::domain::query::{Pagination, PropertyFilter, PropertyQuery, SortBy};
use crate::errors::ServerError;
use crate::responses::{json_response, no_content_response, ResultResp};
use astra::Request;
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;

const API_PREFIX: &str = "/api";
const MAX_BODY_BYTES: u64 = 1024 * 1024;

pub fn handle(req: Request, db: &Database) -> ResultResp {
    if *req.method() == Method::OPTIONS {
        return no_content_response();
    }

    let path = req.uri().path().trim_end_matches('/');
    if path.is_empty() && *req.method() == Method::GET {
        return json_response(
            StatusCode::OK,
            &json!({ "message": "StayHunt API is running!", "version": "1.0.0" }),
        );
    }

    let Some(rest) = path.strip_prefix(API_PREFIX) else {
        return Err(ServerError::not_found());
    };
    let segments: Vec<String> = rest.split('/').skip(1).map(str::to_string).collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let method = req.method().clone();

    match (method, segments.as_slice()) {
        (Method::GET, ["properties"]) => list_properties(&req, db),
        (Method::GET, ["properties", id]) => get_property(db, id),
        (Method::GET, ["locations"]) => list_locations(db),
        (Method::GET, ["search-suggestions"]) => search_suggestions(&req, db),
        (Method::POST, ["admin", "properties"]) => create_property(req, db),
        (Method::PUT, ["admin", "properties", id]) => {
            let id = PropertyId::parse(id)?;
            replace_property(req, db, &id)
        }
        (Method::DELETE, ["admin", "properties", id]) => delete_property(db, id),
        _ => Err(ServerError::not_found()),
    }
}

fn list_properties(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);

    let page = parse_param::<u32>(&params, "page")?.unwrap_or(1);
    let per_page = parse_param::<u32>(&params, "per_page")?.unwrap_or(Pagination::DEFAULT_PER_PAGE);

    let query = PropertyQuery {
        filter: PropertyFilter {
            search: text_param(&params, "search"),
            location: text_param(&params, "location"),
            sub_location: text_param(&params, "sub_location"),
            category: text_param(&params, "category"),
            min_rating: parse_param::<f64>(&params, "min_rating")?,
        },
        sort_by: params
            .get("sort_by")
            .map(|key| SortBy::from_key(key))
            .unwrap_or_default(),
        pagination: Pagination::new(page, per_page)?,
    };

    let page = db.with_conn(|conn| properties::list_properties(conn, &query))?;
    json_response(StatusCode::OK, &page)
}

fn get_property(db: &Database, raw_id: &str) -> ResultResp {
    let id = PropertyId::parse(raw_id)?;
    let record = db.with_conn(|conn| properties::get_property(conn, &id))?;
    json_response(StatusCode::OK, &record)
}

fn list_locations(db: &Database) -> ResultResp {
    let summaries = db.with_conn(|conn| properties::location_summaries(conn))?;
    json_response(StatusCode::OK, &summaries)
}

fn search_suggestions(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let query = params
        .get("query")
        .ok_or_else(|| ServerError::InvalidInput("query parameter is required".into()))?;

    let suggestions = db.with_conn(|conn| properties::suggest(conn, query))?;
    json_response(StatusCode::OK, &suggestions)
}

fn create_property(req: Request, db: &Database) -> ResultResp {
    let details: PropertyDetails = read_json(req)?;
    let record = db.with_conn(|conn| properties::create_property(conn, &details))?;
    json_response(StatusCode::OK, &record)
}

fn replace_property(req: Request, db: &Database, id: &PropertyId) -> ResultResp {
    let details: PropertyDetails = read_json(req)?;
    let record = db.with_conn(|conn| properties::replace_property(conn, id, &details))?;
    json_response(StatusCode::OK, &record)
}

fn delete_property(db: &Database, raw_id: &str) -> ResultResp {
    let id = PropertyId::parse(raw_id)?;
    db.with_conn(|conn| properties::delete_property(conn, &id))?;
    json_response(
        StatusCode::OK,
        &json!({ "message": "Property deleted successfully" }),
    )
}

fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, ServerError> {
    let mut body = req.into_body();
    let reader = body.reader().take(MAX_BODY_BYTES);
    serde_json::from_reader(reader)
        .map_err(|e| ServerError::InvalidInput(format!("Invalid request body: {e}")))
}

/// Percent-decoded query parameters; the last occurrence of a key wins.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Empty values count as absent.
fn text_param(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}

fn parse_param<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, ServerError> {
    match params.get(key).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ServerError::InvalidInput(format!("{key} must be a number, got {raw:?}"))),
    }
}
