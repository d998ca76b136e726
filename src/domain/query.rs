// src/domain/query.rs

use crate::domain::property::{PropertyDetails, PropertyRecord};
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

/// Listing order. Every variant has a secondary key so ties are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    RatingDesc,
    RatingAsc,
    ReviewsDesc,
    ReviewsAsc,
    NameAsc,
}

impl SortBy {
    /// Unknown keys fall back to the default order instead of failing.
    pub fn from_key(key: &str) -> Self {
        match key {
            "rating_asc" => SortBy::RatingAsc,
            "reviews_desc" => SortBy::ReviewsDesc,
            "reviews_asc" => SortBy::ReviewsAsc,
            "name_asc" => SortBy::NameAsc,
            _ => SortBy::RatingDesc,
        }
    }

    pub fn order_clause(self) -> &'static str {
        match self {
            SortBy::RatingDesc => "google_rating DESC, number_of_reviews DESC, seq ASC",
            SortBy::RatingAsc => "google_rating ASC, number_of_reviews ASC, seq ASC",
            SortBy::ReviewsDesc => "number_of_reviews DESC, google_rating DESC, seq ASC",
            SortBy::ReviewsAsc => "number_of_reviews ASC, google_rating ASC, seq ASC",
            SortBy::NameAsc => "homestay_name COLLATE BINARY ASC, seq ASC",
        }
    }
}

/// Filters combine with AND. Text filters are case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Matches name OR location OR sub-location.
    pub search: Option<String>,
    pub location: Option<String>,
    pub sub_location: Option<String>,
    pub category: Option<String>,
    pub min_rating: Option<f64>,
}

impl PropertyFilter {
    pub fn validate(&self) -> Result<(), ServerError> {
        if let Some(r) = self.min_rating {
            if !(PropertyDetails::MIN_RATING..=PropertyDetails::MAX_RATING).contains(&r) {
                return Err(ServerError::InvalidInput(
                    "min_rating must be between 0 and 5".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    per_page: u32,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u32 = 10;
    pub const MAX_PER_PAGE: u32 = 50;

    /// `page` is 1-indexed; `per_page` must lie in 1..=50.
    pub fn new(page: u32, per_page: u32) -> Result<Self, ServerError> {
        if page < 1 {
            return Err(ServerError::InvalidInput("page must be at least 1".into()));
        }
        if !(1..=Self::MAX_PER_PAGE).contains(&per_page) {
            return Err(ServerError::InvalidInput(format!(
                "per_page must be between 1 and {}",
                Self::MAX_PER_PAGE
            )));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyQuery {
    pub filter: PropertyFilter,
    pub sort_by: SortBy,
    pub pagination: Pagination,
}

/// One page of a listing plus the size of the whole filtered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyPage {
    pub properties: Vec<PropertyRecord>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}
