//! The seam between the dispatcher and the remote generative-AI service.

use crate::core::keyfile::KeyError;
use crate::core::message::Source;
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Square,
    Widescreen,
    Tall,
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Tall,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ratio| ratio.as_str() == value)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRequest {
    pub prompt: String,
    pub system_instruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
}

/// Answer text plus the citations found in the grounding metadata, in
/// response order. Sources may carry an empty `uri`; callers filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroundedAnswer {
    pub text: String,
    pub sources: Vec<Source>,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Generates text; the returned string is the raw model output.
    async fn generate_text(&self, request: TextRequest) -> Result<String, GatewayError>;

    /// Generates one PNG image and returns its bytes.
    async fn generate_image(&self, request: ImageRequest) -> Result<Vec<u8>, GatewayError>;

    /// Generates text with web search grounding enabled.
    async fn generate_grounded(&self, request: TextRequest)
        -> Result<GroundedAnswer, GatewayError>;
}

#[derive(Debug)]
pub enum GatewayError {
    /// The API key could not be resolved.
    Config(KeyError),
    /// The request never produced an HTTP response.
    Transport(String),
    /// The service answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body did not have the expected shape.
    Decode(String),
    /// The response was well-formed but carried no usable payload.
    Empty(&'static str),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Config(err) => write!(f, "{err}"),
            GatewayError::Transport(message) => write!(f, "{message}"),
            GatewayError::Http { status, message } => {
                if message.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "{message} (HTTP {status})")
                }
            }
            GatewayError::Decode(message) => write!(f, "Failed to parse response: {message}"),
            GatewayError::Empty(what) => write!(f, "The model returned no {what}."),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GatewayError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KeyError> for GatewayError {
    fn from(err: KeyError) -> Self {
        GatewayError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_parses_only_supported_values() {
        for ratio in AspectRatio::ALL {
            assert_eq!(AspectRatio::parse(ratio.as_str()), Some(ratio));
        }
        assert_eq!(AspectRatio::parse("2:1"), None);
        assert_eq!(AspectRatio::default().as_str(), "1:1");
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = GatewayError::Http {
            status: 429,
            message: "Resource has been exhausted".into(),
        };
        assert_eq!(err.to_string(), "Resource has been exhausted (HTTP 429)");
        let bare = GatewayError::Http {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bare.to_string(), "HTTP 500");
    }
}
