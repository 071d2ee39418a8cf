mod config;
mod env;
mod openapi;
mod routes;

pub use config::TtsProxyConfig;
pub use env::ElevenLabsEnv;
pub use openapi::openapi;
pub use routes::router;
