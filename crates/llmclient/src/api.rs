use std::time::Duration;

use serde_json::{Value, json};

use crate::error::ClientError;
use crate::models::{ChatCompletionResponse, ChatContent};
use crate::types::{ChatClient, MessagePart};
use crate::utils::detect_mime_type;

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_STEP: Duration = Duration::from_secs(5);

impl ChatClient {
    /// Sends one user message and returns the first choice's text.
    pub async fn complete(
        &self,
        parts: Vec<MessagePart>,
        max_tokens: u32,
    ) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));
        let payload = build_payload(&self.model, &parts, max_tokens);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_status(status.as_u16(), body));
        }

        let decoded: ChatCompletionResponse = serde_json::from_str(&body)?;
        extract_text(decoded)
    }

    /// [`complete`](Self::complete) with bounded retry.
    ///
    /// Rate-limit and transport errors are retried up to three attempts with
    /// linear backoff. Auth and other API errors are returned immediately.
    pub async fn complete_with_retry(
        &self,
        parts: Vec<MessagePart>,
        max_tokens: u32,
    ) -> Result<String, ClientError> {
        let mut attempt = 1;
        loop {
            match self.complete(parts.clone(), max_tokens).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    tokio::time::sleep(BACKOFF_STEP * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn classify_status(status: u16, body: String) -> ClientError {
    match status {
        401 | 403 => ClientError::Auth { status },
        429 => ClientError::RateLimited,
        _ => ClientError::Api { status, body },
    }
}

fn build_payload(model: &str, parts: &[MessagePart], max_tokens: u32) -> Value {
    json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": convert_parts(parts)
        }],
        "max_tokens": max_tokens
    })
}

fn convert_parts(parts: &[MessagePart]) -> Vec<Value> {
    parts
        .iter()
        .map(|part| match part {
            MessagePart::Text(text) => json!({
                "type": "text",
                "text": text
            }),
            MessagePart::Image {
                data_b64,
                file_path,
            } => {
                let mime = file_path
                    .as_deref()
                    .map(detect_mime_type)
                    .unwrap_or_else(|| "image/jpeg".to_string());
                json!({
                    "type": "image_url",
                    "image_url": { "url": format!("data:{mime};base64,{data_b64}") }
                })
            }
        })
        .collect()
}

fn extract_text(response: ChatCompletionResponse) -> Result<String, ClientError> {
    let first_choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ClientError::EmptyResponse)?;

    let text = match first_choice.message.content {
        Some(ChatContent::Text(text)) => text,
        Some(ChatContent::Parts(parts)) => {
            let segments: Vec<String> = parts.into_iter().filter_map(|part| part.text).collect();
            segments.join("\n")
        }
        None => String::new(),
    };

    if text.trim().is_empty() {
        return Err(ClientError::EmptyResponse);
    }
    Ok(text)
}
