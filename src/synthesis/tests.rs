use super::*;
use anyhow::Result;
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub Synthesis {}

    #[async_trait]
    impl SynthesisClient for Synthesis {
        async fn synthesize(&self, title: &str, script: &str) -> Result<Option<String>>;
    }
}

#[tokio::test]
async fn test_mock_synthesis_returns_audio_url() {
    let mut mock_client = MockSynthesis::new();
    mock_client
        .expect_synthesize()
        .returning(|_, _| Ok(Some("http://cdn/a.mp3".to_string())));

    let client: Box<dyn SynthesisClient> = Box::new(mock_client);
    let audio_url = client.synthesize("Ep1", "Hello").await.unwrap();
    assert_eq!(audio_url.as_deref(), Some("http://cdn/a.mp3"));
}

#[tokio::test]
async fn test_mock_synthesis_missing_audio_url_is_not_an_error() {
    let mut mock_client = MockSynthesis::new();
    mock_client.expect_synthesize().returning(|_, _| Ok(None));

    let client: Box<dyn SynthesisClient> = Box::new(mock_client);
    let audio_url = client.synthesize("Ep1", "Hello").await.unwrap();
    assert!(audio_url.is_none());
}
