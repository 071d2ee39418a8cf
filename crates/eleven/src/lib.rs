mod client;
mod error;
mod types;
mod voices;

pub use client::{SpeechClient, SpeechClientBuilder};
pub use error::Error;
pub use types::{DEFAULT_API_BASE, DEFAULT_MODEL_ID, VoiceSettings};
pub use voices::{PRESETS, VoicePreset, default_preset, resolve};
