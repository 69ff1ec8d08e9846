use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
mod playht;
pub use playht::PlayHtClient;

#[cfg(test)]
pub mod tests;

pub const DEFAULT_ENDPOINT: &str = "https://api.play.ht/api/v2/tts";
pub const DEFAULT_VOICE: &str = "en-US-JennyNeural";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub endpoint: String,
    pub voice: String,
    pub api_key: Option<String>,
    pub user_id: Option<String>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            api_key: std::env::var("PLAYHT_API_KEY").ok(),
            user_id: std::env::var("PLAYHT_USER_ID").ok(),
        }
    }
}

#[async_trait]
pub trait SynthesisClient: Send + Sync {
    /// Submit a script for synthesis and return the audio URL the provider
    /// handed back, or `None` when its response carried no recognized key.
    async fn synthesize(&self, title: &str, script: &str) -> Result<Option<String>>;
}
