pub mod errors;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;

// Normal JSON responses
pub use json::{json_response, no_content_response};
