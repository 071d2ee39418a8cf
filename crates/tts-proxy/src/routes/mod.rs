mod error;
pub mod speech;
pub mod voices;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::config::TtsProxyConfig;

pub(crate) use error::{Result, RouteError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: TtsProxyConfig,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn speech_client(&self) -> Result<vox_eleven::SpeechClient> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RouteError::MissingConfig("elevenlabs_api_key not configured"))?;

        Ok(vox_eleven::SpeechClient::builder()
            .api_base(&self.config.api_base)
            .api_key(api_key)
            .client(self.client.clone())
            .build())
    }
}

fn make_state(config: TtsProxyConfig) -> AppState {
    AppState {
        config,
        client: reqwest::Client::new(),
    }
}

fn with_common_layers(router: Router) -> Router {
    router.layer(DefaultBodyLimit::max(64 * 1024))
}

pub fn router(config: TtsProxyConfig) -> Router {
    let state = make_state(config);

    with_common_layers(
        Router::new()
            .route("/tts", post(speech::generate))
            .route("/voices", get(voices::list))
            .with_state(state),
    )
}
