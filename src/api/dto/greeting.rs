//! DTO for the API sanity-check endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: &'static str,
}
