//! Handler for the API sanity-check endpoint.

use axum::Json;

use crate::api::dto::greeting::GreetingResponse;

/// Answers with a fixed greeting so clients can check the API is reachable.
///
/// # Endpoint
///
/// `GET /api/hello`
pub async fn hello_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "hello API",
    })
}
