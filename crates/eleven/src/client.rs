use bytes::Bytes;

use crate::error::Error;
use crate::types::{DEFAULT_API_BASE, DEFAULT_MODEL_ID, SynthesisRequest, VoiceSettings};

#[derive(Default)]
pub struct SpeechClientBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    client: Option<reqwest::Client>,
}

impl SpeechClientBuilder {
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> SpeechClient {
        SpeechClient {
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key: self.api_key,
            client: self.client.unwrap_or_default(),
        }
    }
}

/// Client for the ElevenLabs synthesis endpoint.
#[derive(Clone)]
pub struct SpeechClient {
    api_base: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl SpeechClient {
    pub fn builder() -> SpeechClientBuilder {
        SpeechClientBuilder::default()
    }

    /// One synthesis call: text in, raw audio bytes out.
    ///
    /// Single request/response, no retry, no streaming. Non-2xx responses
    /// come back as [`Error::Api`] with the provider's body captured for
    /// server-side logging.
    pub async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        settings: VoiceSettings,
    ) -> Result<Bytes, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.api_base.trim_end_matches('/'),
            voice_id
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&SynthesisRequest {
                text,
                model_id: DEFAULT_MODEL_ID,
                voice_settings: settings,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn synthesize_posts_text_with_api_key_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"))
            .and(header("xi-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "text": "Hello world",
                "model_id": "eleven_monolingual_v1",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 },
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .expect(1)
            .mount(&server)
            .await;

        let client = SpeechClient::builder()
            .api_base(server.uri())
            .api_key("test-key")
            .build();

        let audio = client
            .synthesize(
                "Hello world",
                "21m00Tcm4TlvDq8ikWAM",
                VoiceSettings::default(),
            )
            .await
            .unwrap();

        assert_eq!(audio.as_ref(), &[1, 2, 3]);
    }

    #[tokio::test]
    async fn non_success_response_surfaces_status_and_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = SpeechClient::builder()
            .api_base(server.uri())
            .api_key("bad-key")
            .build();

        let err = client
            .synthesize("hi", "21m00Tcm4TlvDq8ikWAM", VoiceSettings::default())
            .await
            .unwrap_err();

        match err {
            Error::Api { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SpeechClient::builder().api_base(server.uri()).build();

        let err = client
            .synthesize("hi", "21m00Tcm4TlvDq8ikWAM", VoiceSettings::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingApiKey));
    }
}
