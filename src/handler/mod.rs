use serde::{Deserialize, Serialize};

pub mod error;
pub mod handler;
pub mod middleware;
#[cfg(test)]
mod tests;
pub use handler::router;

/// Form fields for `POST /generate`. Both fields are required; presence is
/// checked explicitly so a missing field yields a typed validation error
/// instead of an extractor rejection.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GenerateParams {
    pub title: Option<String>,
    pub script: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateResponse {
    pub id: String,
    pub audio_url: Option<String>,
}
