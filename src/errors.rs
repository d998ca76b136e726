use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, validation, missing records) or the store.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),
    /// Structurally malformed input, e.g. an identifier that can never exist.
    #[error("{0}")]
    BadRequest(String),
    /// Well-formed request carrying values we refuse (short query, bad page).
    #[error("{0}")]
    InvalidInput(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn not_found() -> Self {
        ServerError::NotFound("Not Found".into())
    }

    pub fn property_not_found() -> Self {
        ServerError::NotFound("Property not found".into())
    }

    pub fn invalid_property_id() -> Self {
        ServerError::BadRequest("Invalid property ID".into())
    }

    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InvalidInput(_) => 422,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}
