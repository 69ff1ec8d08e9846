use super::{SynthesisClient, SynthesisConfig};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

/// Play.ht TTS client. Authenticates with an API key (`Authorization`
/// bearer) and an account id (`X-User-Id`) header pair; both are sent as
/// empty strings when unconfigured and the provider rejects the request.
#[derive(Debug)]
pub struct PlayHtClient {
    config: SynthesisConfig,
    http_client: HttpClient,
}

impl PlayHtClient {
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            config,
            http_client: HttpClient::new(),
        }
    }

    /// Play.ht has shipped the audio location under two names; accept
    /// `audioUrl` first and fall back to `url`.
    fn extract_audio_url(body: &serde_json::Value) -> Option<String> {
        body.get("audioUrl")
            .or_else(|| body.get("url"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[async_trait]
impl SynthesisClient for PlayHtClient {
    async fn synthesize(&self, title: &str, script: &str) -> Result<Option<String>> {
        let api_key = self.config.api_key.clone().unwrap_or_default();
        let user_id = self.config.user_id.clone().unwrap_or_default();

        let request_data = serde_json::json!({
            "voice": self.config.voice,
            "content": script,
            "title": title,
        });

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .header("X-User-Id", user_id)
            .json(&request_data)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        let audio_url = Self::extract_audio_url(&body);
        debug!(?audio_url, "synthesis response parsed");
        Ok(audio_url)
    }
}
