use crate::env::ElevenLabsEnv;

/// Relay configuration, injected at construction rather than read from
/// process-wide environment state. Tests build one directly without touching
/// the environment.
#[derive(Clone)]
pub struct TtsProxyConfig {
    pub api_key: Option<String>,
    pub api_base: String,
}

impl TtsProxyConfig {
    pub fn new(env: &ElevenLabsEnv) -> Self {
        Self {
            api_key: env.elevenlabs_api_key.clone(),
            api_base: env.elevenlabs_api_base.clone(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
