use crate::domain::locations::{summarize_locations, LocationSummary};
use crate::domain::property::{PropertyDetails, PropertyId, PropertyRecord};
use crate::domain::query::{PropertyFilter, PropertyPage, PropertyQuery};
use crate::domain::suggestions::{check_query, merge_suggestions, Suggestion, PER_SOURCE_LIMIT};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, homestay_name, location, sub_location, google_address, google_phone, \
    google_rating, number_of_reviews, google_maps_link, photo_url, category, amenities, tariff, \
    source_url, youtube_video, created_at, updated_at";

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    Ok(PropertyRecord {
        id: PropertyId::from_stored(row.get(0)?),
        details: PropertyDetails {
            homestay_name: row.get(1)?,
            location: row.get(2)?,
            sub_location: row.get(3)?,
            google_address: row.get(4)?,
            google_phone: row.get(5)?,
            google_rating: row.get(6)?,
            number_of_reviews: row.get(7)?,
            google_maps_link: row.get(8)?,
            photo_url: row.get(9)?,
            category: row.get(10)?,
            amenities: row.get(11)?,
            tariff: row.get(12)?,
            source_url: row.get(13)?,
            youtube_video: row.get(14)?,
        },
        created_at: row.get(15)?,
        updated_at: row.get(16)?,
    })
}

/// WHERE clause plus its positional parameters.
struct Conditions {
    clauses: Vec<&'static str>,
    params: Vec<Value>,
}

impl Conditions {
    fn from_filter(filter: &PropertyFilter) -> Self {
        let mut c = Conditions {
            clauses: Vec::new(),
            params: Vec::new(),
        };

        if let Some(search) = &filter.search {
            c.clauses.push(
                "(contains_ci(homestay_name, ?) OR contains_ci(location, ?) \
                 OR contains_ci(sub_location, ?))",
            );
            for _ in 0..3 {
                c.params.push(Value::Text(search.clone()));
            }
        }
        if let Some(location) = &filter.location {
            c.clauses.push("contains_ci(location, ?)");
            c.params.push(Value::Text(location.clone()));
        }
        if let Some(sub_location) = &filter.sub_location {
            c.clauses.push("contains_ci(sub_location, ?)");
            c.params.push(Value::Text(sub_location.clone()));
        }
        if let Some(category) = &filter.category {
            c.clauses.push("contains_ci(category, ?)");
            c.params.push(Value::Text(category.clone()));
        }
        if let Some(min_rating) = filter.min_rating {
            c.clauses.push("google_rating >= ?");
            c.params.push(Value::Real(min_rating));
        }
        c
    }

    fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }
}

/// Filtered, sorted page of listings. The total is counted before paging.
pub fn list_properties(conn: &Connection, query: &PropertyQuery) -> Result<PropertyPage, ServerError> {
    query.filter.validate()?;

    let conditions = Conditions::from_filter(&query.filter);
    let where_sql = conditions.where_sql();

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM properties {where_sql}"),
        params_from_iter(conditions.params.iter()),
        |row| row.get(0),
    )?;
    let total = total.max(0) as u64;

    let pagination = query.pagination;
    let mut page_params = conditions.params.clone();
    page_params.push(Value::Integer(i64::from(pagination.per_page())));
    page_params.push(Value::Integer(
        i64::try_from(pagination.offset()).unwrap_or(i64::MAX),
    ));

    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM properties {where_sql} ORDER BY {} LIMIT ? OFFSET ?",
        query.sort_by.order_clause()
    ))?;
    let rows = stmt.query_map(params_from_iter(page_params.iter()), row_to_record)?;

    let mut properties = Vec::new();
    for row in rows {
        properties.push(row?);
    }

    Ok(PropertyPage {
        properties,
        total,
        page: pagination.page(),
        per_page: pagination.per_page(),
        total_pages: pagination.total_pages(total),
    })
}

pub fn get_property(conn: &Connection, id: &PropertyId) -> Result<PropertyRecord, ServerError> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM properties WHERE id = ?1"),
        params![id.as_str()],
        row_to_record,
    )
    .optional()?
    .ok_or_else(ServerError::property_not_found)
}

fn insert_details(
    conn: &Connection,
    id: &PropertyId,
    details: &PropertyDetails,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    let mut stmt = conn.prepare_cached(
        r#"
        INSERT INTO properties (
            id, homestay_name, location, sub_location, google_address, google_phone,
            google_rating, number_of_reviews, google_maps_link, photo_url, category,
            amenities, tariff, source_url, youtube_video, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
        "#,
    )?;
    stmt.execute(params![
        id.as_str(),
        &details.homestay_name,
        &details.location,
        &details.sub_location,
        &details.google_address,
        &details.google_phone,
        details.google_rating,
        details.number_of_reviews,
        &details.google_maps_link,
        &details.photo_url,
        &details.category,
        &details.amenities,
        &details.tariff,
        &details.source_url,
        &details.youtube_video,
        now,
        now,
    ])?;
    Ok(())
}

/// Stores a new listing under a fresh id and returns it as stored.
pub fn create_property(
    conn: &Connection,
    details: &PropertyDetails,
) -> Result<PropertyRecord, ServerError> {
    details.validate()?;

    let id = PropertyId::generate();
    insert_details(conn, &id, details, Utc::now())?;
    tracing::info!(%id, name = %details.homestay_name, "property created");

    get_property(conn, &id)
}

/// Overwrites every client-controlled field; `created_at` is left alone.
pub fn replace_property(
    conn: &Connection,
    id: &PropertyId,
    details: &PropertyDetails,
) -> Result<PropertyRecord, ServerError> {
    details.validate()?;

    let changed = conn.execute(
        r#"
        UPDATE properties SET
            homestay_name = ?1, location = ?2, sub_location = ?3, google_address = ?4,
            google_phone = ?5, google_rating = ?6, number_of_reviews = ?7,
            google_maps_link = ?8, photo_url = ?9, category = ?10, amenities = ?11,
            tariff = ?12, source_url = ?13, youtube_video = ?14, updated_at = ?15
        WHERE id = ?16
        "#,
        params![
            &details.homestay_name,
            &details.location,
            &details.sub_location,
            &details.google_address,
            &details.google_phone,
            details.google_rating,
            details.number_of_reviews,
            &details.google_maps_link,
            &details.photo_url,
            &details.category,
            &details.amenities,
            &details.tariff,
            &details.source_url,
            &details.youtube_video,
            Utc::now(),
            id.as_str(),
        ],
    )?;

    if changed == 0 {
        return Err(ServerError::property_not_found());
    }
    tracing::info!(%id, "property replaced");

    get_property(conn, id)
}

pub fn delete_property(conn: &Connection, id: &PropertyId) -> Result<(), ServerError> {
    let deleted = conn.execute("DELETE FROM properties WHERE id = ?1", params![id.as_str()])?;
    if deleted == 0 {
        return Err(ServerError::property_not_found());
    }
    tracing::info!(%id, "property deleted");
    Ok(())
}

/// Every `(location, sub_location)` pair in storage order.
pub fn location_pairs(conn: &Connection) -> Result<Vec<(String, String)>, ServerError> {
    let mut stmt = conn.prepare("SELECT location, sub_location FROM properties ORDER BY seq")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Location rollup recomputed from the current contents of the store.
pub fn location_summaries(conn: &Connection) -> Result<Vec<LocationSummary>, ServerError> {
    Ok(summarize_locations(location_pairs(conn)?))
}

pub fn name_matches(conn: &Connection, needle: &str, limit: usize) -> Result<Vec<String>, ServerError> {
    let mut stmt = conn.prepare(
        "SELECT homestay_name FROM properties
         WHERE contains_ci(homestay_name, ?1)
         ORDER BY seq LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![needle, limit as i64], |row| {
        row.get(0)
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn place_matches(
    conn: &Connection,
    needle: &str,
    limit: usize,
) -> Result<Vec<(String, String)>, ServerError> {
    let mut stmt = conn.prepare(
        "SELECT location, sub_location FROM properties
         WHERE contains_ci(location, ?1) OR contains_ci(sub_location, ?1)
         ORDER BY seq LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![needle, limit as i64], |row| {
        Ok((row.get(0)?, row.get(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Up to five typed suggestions for a search box.
pub fn suggest(conn: &Connection, query: &str) -> Result<Vec<Suggestion>, ServerError> {
    check_query(query)?;

    let names = name_matches(conn, query, PER_SOURCE_LIMIT)?;
    let places = place_matches(conn, query, PER_SOURCE_LIMIT)?;
    Ok(merge_suggestions(names, places))
}

/// Bulk insert in one transaction, optionally emptying the collection first.
pub fn insert_many(
    conn: &mut Connection,
    batch: &[PropertyDetails],
    replace_existing: bool,
) -> Result<usize, ServerError> {
    let tx = conn.transaction()?;

    if replace_existing {
        let cleared = clear_properties(&tx)?;
        tracing::info!(cleared, "cleared existing properties");
    }

    let now = Utc::now();
    for details in batch {
        insert_details(&tx, &PropertyId::generate(), details, now)?;
    }

    tx.commit()?;
    Ok(batch.len())
}

pub fn clear_properties(conn: &Connection) -> Result<usize, ServerError> {
    Ok(conn.execute("DELETE FROM properties", [])?)
}

pub fn count_properties(conn: &Connection) -> Result<u64, ServerError> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))?;
    Ok(n.max(0) as u64)
}
