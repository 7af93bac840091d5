//! Plain-terminal rendering of message parts.
//!
//! Images are decoded from their data URIs and written as PNG files; the
//! rendered text points at the file.

use crate::core::message::{decode_data_uri, Message, MessagePart, Source};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const USER_LABEL: &str = "you";
const MODEL_LABEL: &str = "nix";

pub struct TerminalRenderer {
    image_dir: PathBuf,
}

impl TerminalRenderer {
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
        }
    }

    /// Renders every part of `message`, separated by blank lines. Image
    /// parts are saved under the image directory first.
    pub fn render(&self, message: &Message) -> String {
        message
            .parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                let saved = match part {
                    MessagePart::Image { content } => self.save_image(message, index, content),
                    _ => None,
                };
                render_part(part, saved.as_deref())
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Renders a message for transcript display, prefixed by its speaker.
    pub fn render_with_label(&self, message: &Message) -> String {
        let label = if message.is_user() {
            USER_LABEL
        } else {
            MODEL_LABEL
        };
        format!("{label}> {}", self.render(message))
    }

    fn save_image(&self, message: &Message, index: usize, uri: &str) -> Option<PathBuf> {
        let path = self.image_dir.join(image_file_name(&message.id, index));
        match write_image(&path, uri) {
            Ok(()) => {
                debug!(path = %path.display(), "saved image");
                Some(path)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not save image");
                None
            }
        }
    }
}

pub fn image_file_name(message_id: &str, index: usize) -> String {
    if index == 0 {
        format!("{message_id}.png")
    } else {
        format!("{message_id}-{index}.png")
    }
}

fn write_image(path: &Path, uri: &str) -> io::Result<()> {
    let (_, bytes) = decode_data_uri(uri)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "not a base64 data URI"))?;
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, bytes)
}

/// Terminal text for one part. `saved_image` is where an image part was
/// written, if anywhere.
pub fn render_part(part: &MessagePart, saved_image: Option<&Path>) -> String {
    match part {
        MessagePart::Text { content } => content.clone(),
        MessagePart::Code { content, language } => format!("```{language}\n{content}\n```"),
        MessagePart::Image { content } => match saved_image {
            Some(path) => format!("[image saved to {}]", path.display()),
            None => {
                let size = decode_data_uri(content).map(|(_, bytes)| bytes.len());
                match size {
                    Some(size) => format!("[image, {size} bytes]"),
                    None => "[image]".to_string(),
                }
            }
        },
        MessagePart::Audio { content } => format!("🔊 {content}"),
        MessagePart::SearchResult { content, sources } => {
            if sources.is_empty() {
                content.clone()
            } else {
                format!("{content}\n\n{}", render_sources(sources))
            }
        }
    }
}

/// Numbered source list, e.g. `1. Rust Blog <https://blog.rust-lang.org>`.
pub fn render_sources(sources: &[Source]) -> String {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            if source.label() == source.uri {
                format!("{}. {}", i + 1, source.uri)
            } else {
                format!("{}. {} <{}>", i + 1, source.label(), source.uri)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
