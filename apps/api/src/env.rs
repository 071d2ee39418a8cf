use std::sync::OnceLock;

use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(flatten)]
    pub elevenlabs: vox_tts_proxy::ElevenLabsEnv,
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let _ = dotenvy::dotenv();
        envy::from_env().expect("Failed to load environment")
    })
}
