use axum::{Json, extract::State};
use base64::Engine;
use serde::{Deserialize, Serialize};

use vox_eleven::VoiceSettings;

use super::{AppState, Result, RouteError};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    /// Base64-encoded audio bytes from the provider.
    pub audio: String,
    /// Preset key the request resolved to.
    pub voice: String,
}

#[utoipa::path(
    post,
    path = "/tts",
    request_body = SpeechRequest,
    responses(
        (status = 200, description = "Audio generated", body = SpeechResponse),
        (status = 400, description = "Missing or empty text", body = super::error::ErrorResponse),
        (status = 500, description = "Configuration or provider failure", body = super::error::ErrorResponse),
    ),
    tag = "tts",
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<SpeechRequest>,
) -> Result<Json<SpeechResponse>> {
    // Empty scripts are rejected before the credential check or any
    // outbound call.
    if payload.text.trim().is_empty() {
        return Err(RouteError::InvalidRequest("text is required".to_string()));
    }

    let client = state.speech_client()?;
    let preset = vox_eleven::resolve(payload.voice_id.as_deref());

    tracing::info!(
        voice = %preset.key,
        text_chars = payload.text.len(),
        "speech_synthesis_request"
    );

    let audio = client
        .synthesize(&payload.text, preset.voice_id, VoiceSettings::default())
        .await?;

    tracing::info!(
        voice = %preset.key,
        audio_bytes = audio.len(),
        "speech_synthesis_succeeded"
    );

    Ok(Json(SpeechResponse {
        audio: base64::engine::general_purpose::STANDARD.encode(&audio),
        voice: preset.key.to_string(),
    }))
}
