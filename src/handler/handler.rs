use crate::app::AppState;
use crate::store::Episode;
use axum::{
    extract::{Form, State},
    http::header,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::{
    error::ApiError, middleware::clientip::ClientIp, GenerateParams, GenerateResponse,
};

/// RFC-822 date as RSS 2.0 wants it, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_episode))
        .route("/feed.xml", get(rss_feed))
}

pub async fn generate_episode(
    client_ip: ClientIp,
    State(state): State<AppState>,
    Form(params): Form<GenerateParams>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let title = params.title.ok_or_else(|| ApiError::missing_field("title"))?;
    let script = params
        .script
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::missing_field("script"))?;

    let id = Uuid::new_v4().to_string();
    let pub_date = Utc::now().format(PUB_DATE_FORMAT).to_string();

    let audio_url = state.synthesis.synthesize(&title, &script).await?;

    state.store.append(Episode {
        id: id.clone(),
        title,
        script,
        audio_url: audio_url.clone(),
        pub_date,
    });
    info!(
        client_ip = client_ip.to_string(),
        id,
        has_audio = audio_url.is_some(),
        "episode created"
    );

    Ok(Json(GenerateResponse { id, audio_url }))
}

pub async fn rss_feed(State(state): State<AppState>) -> Response {
    let episodes = state.store.snapshot();
    let xml = crate::feed::render(&state.config.feed, &episodes);
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
