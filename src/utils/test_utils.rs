#[cfg(test)]
use crate::core::gateway::{Gateway, GatewayError, GroundedAnswer, ImageRequest, TextRequest};
#[cfg(test)]
use crate::core::message::Source;
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
pub const DEFAULT_TEXT_REPLY: &str = "mock reply";

/// A request observed by [`ScriptedGateway`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Text(TextRequest),
    Image(ImageRequest),
    Grounded(TextRequest),
}

/// In-memory [`Gateway`] that replays queued replies and records every call.
///
/// When a queue is empty, text calls answer [`DEFAULT_TEXT_REPLY`], image
/// calls answer four PNG signature bytes and grounded calls answer the
/// default text with no sources.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedGateway {
    text: Mutex<VecDeque<Result<String, GatewayError>>>,
    images: Mutex<VecDeque<Result<Vec<u8>, GatewayError>>>,
    grounded: Mutex<VecDeque<Result<GroundedAnswer, GatewayError>>>,
    calls: Mutex<Vec<GatewayCall>>,
}

#[cfg(test)]
impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, reply: impl Into<String>) -> Self {
        self.text.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    pub fn with_text_error(self, err: GatewayError) -> Self {
        self.text.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_image(self, bytes: Vec<u8>) -> Self {
        self.images.lock().unwrap().push_back(Ok(bytes));
        self
    }

    pub fn with_image_error(self, err: GatewayError) -> Self {
        self.images.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_grounded(self, text: impl Into<String>, sources: &[(&str, &str)]) -> Self {
        let answer = GroundedAnswer {
            text: text.into(),
            sources: sources
                .iter()
                .map(|(title, uri)| Source {
                    title: title.to_string(),
                    uri: uri.to_string(),
                })
                .collect(),
        };
        self.grounded.lock().unwrap().push_back(Ok(answer));
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[cfg(test)]
#[async_trait]
impl Gateway for ScriptedGateway {
    async fn generate_text(&self, request: TextRequest) -> Result<String, GatewayError> {
        self.record(GatewayCall::Text(request));
        self.text
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_TEXT_REPLY.to_string()))
    }

    async fn generate_image(&self, request: ImageRequest) -> Result<Vec<u8>, GatewayError> {
        self.record(GatewayCall::Image(request));
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![0x89, b'P', b'N', b'G']))
    }

    async fn generate_grounded(
        &self,
        request: TextRequest,
    ) -> Result<GroundedAnswer, GatewayError> {
        self.record(GatewayCall::Grounded(request));
        self.grounded.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(GroundedAnswer {
                text: DEFAULT_TEXT_REPLY.to_string(),
                sources: Vec::new(),
            })
        })
    }
}
