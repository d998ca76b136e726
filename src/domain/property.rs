// src/domain/property.rs

use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier: 24 lowercase hex characters.
///
/// The first four bytes are the creation second (big-endian), the remaining
/// eight are random, so ids sort roughly by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub const LEN: usize = 24;

    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        let secs = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);

        PropertyId(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Validates the shape of an id coming from a client.
    /// Anything that could never have been issued is a bad request.
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        if raw.len() != Self::LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ServerError::invalid_property_id());
        }
        Ok(PropertyId(raw.to_ascii_lowercase()))
    }

    /// Wraps an id read back from the store, which only holds issued ids.
    pub(crate) fn from_stored(raw: String) -> Self {
        PropertyId(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The client-controlled part of a listing. Admin create and replace
/// accept exactly this; everything else is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub homestay_name: String,
    pub location: String,
    pub sub_location: String,
    pub google_address: String,
    pub google_phone: String,
    pub google_rating: f64,
    pub number_of_reviews: u32,
    pub google_maps_link: String,
    pub photo_url: String,
    /// Free-form, e.g. "Resort" or "Homestay".
    pub category: String,
    pub amenities: String,
    pub tariff: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub youtube_video: Option<String>,
}

impl PropertyDetails {
    pub const MIN_RATING: f64 = 0.0;
    pub const MAX_RATING: f64 = 5.0;

    pub fn validate(&self) -> Result<(), ServerError> {
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&self.google_rating) {
            return Err(ServerError::InvalidInput(format!(
                "google_rating must be between {} and {}",
                Self::MIN_RATING,
                Self::MAX_RATING
            )));
        }
        Ok(())
    }
}

/// A listing as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "_id")]
    pub id: PropertyId,
    #[serde(flatten)]
    pub details: PropertyDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
