use std::path::Path;
use std::time::Duration;

use crate::error::ClientError;
use crate::utils;

/// One piece of a user message: plain text or an inlined image.
#[derive(Clone, Debug)]
pub enum MessagePart {
    Text(String),
    Image {
        data_b64: String,
        /// Original file path, kept so the MIME type can be derived.
        file_path: Option<String>,
    },
}

impl MessagePart {
    pub fn text(text: impl Into<String>) -> Self {
        MessagePart::Text(text.into())
    }

    pub fn image_b64(data_b64: impl Into<String>) -> Self {
        MessagePart::Image {
            data_b64: data_b64.into(),
            file_path: None,
        }
    }

    /// Reads an image file and encodes it for transmission.
    pub fn image_file(path: &Path) -> Result<Self, ClientError> {
        let data_b64 = utils::encode_image_to_base64(path)?;
        Ok(MessagePart::Image {
            data_b64,
            file_path: Some(path.to_string_lossy().into_owned()),
        })
    }
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct ChatClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) model: String,
}

impl ChatClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}
