use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("api_key is required")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ElevenLabs API error ({status}): {detail}")]
    Api { status: u16, detail: String },
}
