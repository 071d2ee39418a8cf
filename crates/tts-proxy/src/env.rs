use serde::{Deserialize, Deserializer};

fn default_api_base() -> String {
    vox_eleven::DEFAULT_API_BASE.to_string()
}

fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Provider credentials and endpoint, loaded from the environment by the
/// server binary and passed in explicitly. A missing key is not fatal at
/// startup; it becomes a per-request configuration error.
#[derive(Clone, Deserialize)]
pub struct ElevenLabsEnv {
    #[serde(default, deserialize_with = "filter_empty")]
    pub elevenlabs_api_key: Option<String>,
    #[serde(default = "default_api_base")]
    pub elevenlabs_api_base: String,
}
