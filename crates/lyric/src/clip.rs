use base64::Engine;
use bytes::Bytes;
use thiserror::Error;

pub const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("invalid base64 audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("audio payload is empty")]
    Empty,
}

/// Decoded audio for one generation.
///
/// The relay hands back base64; this decodes it once at the boundary.
/// Dropping the clip (or replacing it via
/// [`crate::session::LyricSession::load`]) releases the bytes, so repeated
/// generations don't accumulate.
#[derive(Debug, Clone)]
pub struct AudioClip {
    bytes: Bytes,
    content_type: String,
}

impl AudioClip {
    pub fn from_base64(payload: &str, content_type: impl Into<String>) -> Result<Self, ClipError> {
        let decoded = base64::engine::general_purpose::STANDARD.decode(payload)?;
        if decoded.is_empty() {
            return Err(ClipError::Empty);
        }

        Ok(Self {
            bytes: Bytes::from(decoded),
            content_type: content_type.into(),
        })
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
