//! Rewriter: one chat-completion request per call, typed errors, cancellation.

mod error;
mod prompt;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use serde::Serialize;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

pub use error::{RewriteError, map_api_error};
pub use prompt::{Tone, build_instruction};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Inputs for one rewrite call. The credential is threaded in explicitly;
/// nothing here reads the environment.
pub struct RewriteRequest<'a> {
    pub text: &'a str,
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub model: &'a str,
    pub tone: Tone,
    pub cancel_token: Option<CancellationToken>,
}

/// Send `text` to the provider to be rewritten in the requested tone.
///
/// Exactly one outbound request per invocation; no retries, no streaming.
/// An empty API key fails fast before any client is constructed, so no
/// network I/O happens in that case. The call races `cancel_token` when one
/// is supplied.
pub async fn rewrite(req: RewriteRequest<'_>) -> Result<String, RewriteError> {
    if req.api_key.trim().is_empty() {
        return Err(RewriteError::MissingApiKey);
    }

    let openai_config = OpenAIConfig::new()
        .with_api_base(req.base_url)
        .with_api_key(req.api_key);
    let client = Client::with_config(openai_config);

    log::debug!("rewrite request: model={} tone={:?}", req.model, req.tone);

    let instruction = build_instruction(req.tone);
    let messages = [
        ChatMessage {
            role: "system",
            content: &instruction,
        },
        ChatMessage {
            role: "user",
            content: req.text,
        },
    ];

    let chat_api = client.chat();
    let request_future = chat_api.create_byot::<_, Value>(json!({
        "model": req.model,
        "messages": messages,
    }));

    let response = if let Some(token) = req.cancel_token.as_ref() {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(RewriteError::Cancelled);
            }
            result = request_future => result,
        }
    } else {
        request_future.await
    }
    .map_err(map_api_error)?;

    if let Some(err) = response.get("error") {
        let msg = err
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(RewriteError::ApiMessage(msg.to_string()));
    }

    extract_content(&response)
}

/// Pull `choices[0].message.content` out of a chat-completion response body.
fn extract_content(response: &Value) -> Result<String, RewriteError> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| RewriteError::MalformedResponse(response.to_string()))
}
