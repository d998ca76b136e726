// src/domain/suggestions.rs

use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

pub const MIN_QUERY_CHARS: usize = 3;
/// Candidates fetched per source (names, places).
pub const PER_SOURCE_LIMIT: usize = 3;
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    #[serde(rename = "property")]
    PropertyName,
    Location,
    SubLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

/// Query length is counted in characters, not bytes.
pub fn check_query(query: &str) -> Result<(), ServerError> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(ServerError::InvalidInput(format!(
            "query must be at least {MIN_QUERY_CHARS} characters"
        )));
    }
    Ok(())
}

/// Merges name matches and `(location, sub_location)` matches into one list.
///
/// Names come first, then each place contributes its location followed by its
/// sub-location. Text already present in the list is skipped regardless of
/// kind, and the result is capped at [`MAX_SUGGESTIONS`].
pub fn merge_suggestions(names: Vec<String>, places: Vec<(String, String)>) -> Vec<Suggestion> {
    let candidates = names
        .into_iter()
        .map(|text| (text, SuggestionKind::PropertyName))
        .chain(places.into_iter().flat_map(|(location, sub_location)| {
            [
                (location, SuggestionKind::Location),
                (sub_location, SuggestionKind::SubLocation),
            ]
        }));

    let mut out: Vec<Suggestion> = Vec::with_capacity(MAX_SUGGESTIONS);
    for (text, kind) in candidates {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if out.iter().any(|s| s.text == text) {
            continue;
        }
        out.push(Suggestion { text, kind });
    }
    out
}
