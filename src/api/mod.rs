use crate::core::message::Source;
use serde::{Deserialize, Serialize};

pub mod gemini;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    /// A single user turn with an optional system instruction.
    pub fn user_turn(prompt: &str, system_instruction: &str) -> Self {
        let system_instruction = (!system_instruction.is_empty()).then(|| Content {
            role: None,
            parts: vec![TextPart::new(system_instruction)],
        });
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![TextPart::new(prompt)],
            }],
            system_instruction,
            tools: Vec::new(),
        }
    }

    pub fn with_google_search(mut self) -> Self {
        self.tools.push(Tool {
            google_search: GoogleSearch {},
        });
        self
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<TextPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TextPart {
    #[serde(default)]
    pub text: String,
}

impl TextPart {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Serialize, Clone, Debug)]
pub struct GoogleSearch {}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// Response parts may carry non-text payloads; only `text` is read.
#[derive(Deserialize, Debug, Default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WebChunk {
    pub title: Option<String>,
    pub uri: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, trimmed.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        Some(text.trim().to_string())
    }

    /// Web citations of the first candidate in response order. Missing
    /// fields become empty strings.
    pub fn sources(&self) -> Vec<Source> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .map(|web| Source {
                        title: web.title.clone().unwrap_or_default(),
                        uri: web.uri.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PredictRequest {
    pub instances: Vec<PredictInstance>,
    pub parameters: PredictParameters,
}

#[derive(Serialize, Clone, Debug)]
pub struct PredictInstance {
    pub prompt: String,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    pub sample_count: u32,
    pub aspect_ratio: String,
    pub output_options: OutputOptions,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub mime_type: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct PredictResponse {
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub bytes_base64_encoded: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
    pub status: Option<String>,
}
