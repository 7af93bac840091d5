use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const IMAGE_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A web page cited by a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    pub uri: String,
}

impl Source {
    /// Title when present, otherwise the URI.
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }
}

/// One typed piece of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    Text {
        content: String,
    },
    Code {
        content: String,
        language: String,
    },
    /// `content` is a `data:` URI.
    Image {
        content: String,
    },
    /// `content` is the text to be spoken by the front-end.
    Audio {
        content: String,
    },
    SearchResult {
        content: String,
        #[serde(default)]
        sources: Vec<Source>,
    },
}

impl MessagePart {
    pub fn text(content: impl Into<String>) -> Self {
        MessagePart::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        MessagePart::Code {
            content: content.into(),
            language: language.into(),
        }
    }

    /// Wraps raw PNG bytes as an inline `data:` URI.
    pub fn png_image(bytes: &[u8]) -> Self {
        MessagePart::Image {
            content: format!(
                "data:{IMAGE_MIME_TYPE};base64,{}",
                BASE64_STANDARD.encode(bytes)
            ),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            MessagePart::Text { content }
            | MessagePart::Code { content, .. }
            | MessagePart::Image { content }
            | MessagePart::Audio { content }
            | MessagePart::SearchResult { content, .. } => content,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MessagePart::Text { .. } => "text",
            MessagePart::Code { .. } => "code",
            MessagePart::Image { .. } => "image",
            MessagePart::Audio { .. } => "audio",
            MessagePart::SearchResult { .. } => "search_result",
        }
    }
}

/// Decodes the payload of a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = BASE64_STANDARD.decode(payload.trim()).ok()?;
    Some((mime.to_string(), bytes))
}

/// Stored records go through [`Message::new`] so an empty `parts` array
/// loads as one empty text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMessage")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub parts: Vec<MessagePart>,
}

#[derive(Deserialize)]
struct StoredMessage {
    id: String,
    role: Role,
    #[serde(default)]
    parts: Vec<MessagePart>,
}

impl From<StoredMessage> for Message {
    fn from(stored: StoredMessage) -> Self {
        Message::new(stored.id, stored.role, stored.parts)
    }
}

impl Message {
    /// Builds a message, substituting a single empty text part when `parts`
    /// is empty so a message always has content to render.
    pub fn new(id: impl Into<String>, role: Role, mut parts: Vec<MessagePart>) -> Self {
        if parts.is_empty() {
            parts.push(MessagePart::text(""));
        }
        Self {
            id: id.into(),
            role,
            parts,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_model(&self) -> bool {
        self.role == Role::Model
    }
}
