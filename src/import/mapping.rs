// src/import/mapping.rs
//
// Spreadsheet rows arrive as JSON objects keyed by column header. Each
// column is mapped onto one `PropertyDetails` field through an explicit
// rule table; a row either becomes a record or is skipped with a reason.

use crate::domain::property::PropertyDetails;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Location,
    SubLocation,
    Address,
    Phone,
    Rating,
    Reviews,
    MapsLink,
    PhotoUrl,
    Category,
    Amenities,
    Tariff,
    SourceUrl,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Trimmed string; missing or blank becomes "".
    Text,
    /// Trimmed string; missing or blank becomes `None`.
    OptionalText,
    /// Float in 0..=5; anything else becomes 0.
    Rating,
    /// Non-negative integer, thousands separators allowed; anything else becomes 0.
    Count,
}

pub struct ColumnRule {
    pub header: &'static str,
    /// Also accepted: the snake_case field name used by the API.
    pub alias: &'static str,
    pub field: Field,
    pub coercion: Coercion,
}

pub const COLUMN_RULES: &[ColumnRule] = &[
    ColumnRule { header: "Homestay Name", alias: "homestay_name", field: Field::Name, coercion: Coercion::Text },
    ColumnRule { header: "Location", alias: "location", field: Field::Location, coercion: Coercion::Text },
    ColumnRule { header: "Sub Location", alias: "sub_location", field: Field::SubLocation, coercion: Coercion::Text },
    ColumnRule { header: "Google Address", alias: "google_address", field: Field::Address, coercion: Coercion::Text },
    ColumnRule { header: "Google Phone", alias: "google_phone", field: Field::Phone, coercion: Coercion::Text },
    ColumnRule { header: "Google Rating", alias: "google_rating", field: Field::Rating, coercion: Coercion::Rating },
    ColumnRule { header: "Number of Reviews", alias: "number_of_reviews", field: Field::Reviews, coercion: Coercion::Count },
    ColumnRule { header: "Google Maps Link", alias: "google_maps_link", field: Field::MapsLink, coercion: Coercion::Text },
    ColumnRule { header: "Photo URL", alias: "photo_url", field: Field::PhotoUrl, coercion: Coercion::Text },
    ColumnRule { header: "Category", alias: "category", field: Field::Category, coercion: Coercion::Text },
    ColumnRule { header: "Amenities", alias: "amenities", field: Field::Amenities, coercion: Coercion::Text },
    ColumnRule { header: "Tariff", alias: "tariff", field: Field::Tariff, coercion: Coercion::Text },
    ColumnRule { header: "Source URL", alias: "source_url", field: Field::SourceUrl, coercion: Coercion::OptionalText },
    ColumnRule { header: "YouTube Video", alias: "youtube_video", field: Field::Video, coercion: Coercion::OptionalText },
];

/// Names that spreadsheet exports use for "no value".
const PLACEHOLDER_NAMES: &[&str] = &["nan", "none", "null", "n/a", "-"];

#[derive(Debug, Clone, PartialEq)]
enum Coerced {
    Text(String),
    OptionalText(Option<String>),
    Rating(f64),
    Count(u32),
}

fn raw_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // nested structures are not cell values
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_rating(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        other => raw_text(other).and_then(|s| s.parse::<f64>().ok()),
    };
    parsed
        .filter(|r| (PropertyDetails::MIN_RATING..=PropertyDetails::MAX_RATING).contains(r))
        .unwrap_or(0.0)
}

fn coerce_count(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        other => raw_text(other)
            .map(|s| s.replace(',', ""))
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(0),
    }
}

fn coerce(rule: &ColumnRule, value: Option<&Value>) -> Coerced {
    match rule.coercion {
        Coercion::Text => Coerced::Text(raw_text(value).unwrap_or_default()),
        Coercion::OptionalText => Coerced::OptionalText(raw_text(value)),
        Coercion::Rating => Coerced::Rating(coerce_rating(value)),
        Coercion::Count => Coerced::Count(coerce_count(value)),
    }
}

fn lookup<'a>(row: &'a Map<String, Value>, rule: &ColumnRule) -> Option<&'a Value> {
    row.get(rule.header).or_else(|| row.get(rule.alias))
}

fn is_placeholder(name: &str) -> bool {
    name.is_empty()
        || PLACEHOLDER_NAMES
            .iter()
            .any(|p| name.eq_ignore_ascii_case(p))
}

/// Maps one spreadsheet row. `Err` carries the reason the row was skipped.
pub fn map_row(row: &Value) -> Result<PropertyDetails, String> {
    let row = row.as_object().ok_or("row is not an object")?;

    let mut details = PropertyDetails {
        homestay_name: String::new(),
        location: String::new(),
        sub_location: String::new(),
        google_address: String::new(),
        google_phone: String::new(),
        google_rating: 0.0,
        number_of_reviews: 0,
        google_maps_link: String::new(),
        photo_url: String::new(),
        category: String::new(),
        amenities: String::new(),
        tariff: String::new(),
        source_url: None,
        youtube_video: None,
    };

    for rule in COLUMN_RULES {
        let value = lookup(row, rule);
        match (rule.field, coerce(rule, value)) {
            (Field::Name, Coerced::Text(s)) => details.homestay_name = s,
            (Field::Location, Coerced::Text(s)) => details.location = s,
            (Field::SubLocation, Coerced::Text(s)) => details.sub_location = s,
            (Field::Address, Coerced::Text(s)) => details.google_address = s,
            (Field::Phone, Coerced::Text(s)) => details.google_phone = s,
            (Field::Rating, Coerced::Rating(r)) => {
                if value.is_some() && r == 0.0 {
                    tracing::debug!(name = %details.homestay_name, "rating coerced to 0");
                }
                details.google_rating = r
            }
            (Field::Reviews, Coerced::Count(n)) => details.number_of_reviews = n,
            (Field::MapsLink, Coerced::Text(s)) => details.google_maps_link = s,
            (Field::PhotoUrl, Coerced::Text(s)) => details.photo_url = s,
            (Field::Category, Coerced::Text(s)) => details.category = s,
            (Field::Amenities, Coerced::Text(s)) => details.amenities = s,
            (Field::Tariff, Coerced::Text(s)) => details.tariff = s,
            (Field::SourceUrl, Coerced::OptionalText(s)) => details.source_url = s,
            (Field::Video, Coerced::OptionalText(s)) => details.youtube_video = s,
            (field, coerced) => {
                return Err(format!("column rule mismatch: {field:?} got {coerced:?}"));
            }
        }
    }

    if is_placeholder(&details.homestay_name) {
        return Err(format!(
            "missing or placeholder name {:?}",
            details.homestay_name
        ));
    }

    Ok(details)
}
