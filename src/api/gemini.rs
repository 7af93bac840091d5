//! Gemini / Imagen REST client.

use super::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, OutputOptions, PredictInstance,
    PredictParameters, PredictRequest, PredictResponse,
};
use crate::core::gateway::{Gateway, GatewayError, GroundedAnswer, ImageRequest, TextRequest};
use crate::core::keyfile::KeyResolver;
use crate::core::message::IMAGE_MIME_TYPE;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    text_model: String,
    image_model: String,
    keys: KeyResolver,
}

impl GeminiClient {
    pub fn new(keys: KeyResolver) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            keys,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    async fn post<B, R>(&self, model: &str, method: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let api_key = self.keys.resolve().await?;
        let url = endpoint(&self.base_url, model, method);
        debug!(%url, "sending request");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "request failed");
            return Err(map_http_error(status.as_u16(), &body_text));
        }

        response
            .json::<R>()
            .await
            .map_err(|err| GatewayError::Decode(err.without_url().to_string()))
    }

    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        self.post(&self.text_model, "generateContent", &request)
            .await
    }
}

#[async_trait]
impl Gateway for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, GatewayError> {
        let body = GenerateContentRequest::user_turn(&request.prompt, &request.system_instruction);
        let response = self.generate_content(body).await?;
        response.text().ok_or(GatewayError::Empty("text"))
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<Vec<u8>, GatewayError> {
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: request.prompt,
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: request.aspect_ratio.as_str().to_string(),
                output_options: OutputOptions {
                    mime_type: IMAGE_MIME_TYPE.to_string(),
                },
            },
        };
        let response: PredictResponse = self.post(&self.image_model, "predict", &body).await?;
        decode_prediction(response)
    }

    async fn generate_grounded(
        &self,
        request: TextRequest,
    ) -> Result<GroundedAnswer, GatewayError> {
        let body = GenerateContentRequest::user_turn(&request.prompt, &request.system_instruction)
            .with_google_search();
        let response = self.generate_content(body).await?;
        let text = response.text().ok_or(GatewayError::Empty("text"))?;
        Ok(GroundedAnswer {
            text,
            sources: response.sources(),
        })
    }
}

/// `{base}/models/{model}:{method}`, tolerating a trailing slash on `base`.
pub fn endpoint(base_url: &str, model: &str, method: &str) -> String {
    format!(
        "{}/models/{model}:{method}",
        base_url.trim_end_matches('/')
    )
}

/// Builds an error from a non-success response, preferring the JSON
/// `error.message` field over the raw body.
pub fn map_http_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message.or(wrapper.error.status))
        .map(|message| message.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| body.trim().to_string());
    GatewayError::Http { status, message }
}

fn decode_prediction(response: PredictResponse) -> Result<Vec<u8>, GatewayError> {
    let encoded = response
        .predictions
        .into_iter()
        .next()
        .and_then(|prediction| prediction.bytes_base64_encoded)
        .filter(|encoded| !encoded.is_empty())
        .ok_or(GatewayError::Empty("image"))?;
    BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|err| GatewayError::Decode(err.to_string()))
}
