use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "default")]
    pub is_default: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceInfo>,
}

#[utoipa::path(
    get,
    path = "/voices",
    responses(
        (status = 200, description = "Available voice presets", body = VoicesResponse),
    ),
    tag = "tts",
)]
pub async fn list() -> Json<VoicesResponse> {
    let default_key = vox_eleven::default_preset().key;

    let voices = vox_eleven::PRESETS
        .iter()
        .map(|preset| VoiceInfo {
            id: preset.key.to_string(),
            name: preset.name.to_string(),
            description: preset.description.to_string(),
            is_default: preset.key == default_key,
        })
        .collect();

    Json(VoicesResponse { voices })
}
