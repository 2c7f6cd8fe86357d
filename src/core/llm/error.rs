//! Rewrite and API error types.

/// Errors from the rewrite pipeline.
#[derive(Debug)]
pub enum RewriteError {
    /// No API key was supplied; no request was sent.
    MissingApiKey,
    ApiAuth(String),
    ApiMessage(String),
    /// The provider answered but the body had no usable content.
    MalformedResponse(String),
    /// The request was cancelled by the caller.
    Cancelled,
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewriteError::MissingApiKey => write!(
                f,
                "No API key provided. Set OPENROUTER_API_KEY or run `set-key` first."
            ),
            RewriteError::ApiAuth(msg) => write!(f, "{}", msg),
            RewriteError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            RewriteError::MalformedResponse(body) => {
                write!(f, "Unexpected response from provider: {}", body)
            }
            RewriteError::Cancelled => write!(f, "Request cancelled"),
            RewriteError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RewriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RewriteError::Other(e) => e.source(),
            _ => None,
        }
    }
}

/// Map async-openai or API errors into RewriteError.
pub fn map_api_error<E>(e: E) -> RewriteError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("401") {
        return RewriteError::ApiAuth(format!(
            "API error (401): authentication failed. Check OPENROUTER_API_KEY. ({})",
            s
        ));
    }
    if s.contains("\"error\"")
        && let Some((_, rest)) = s.split_once("\"message\":\"")
        && let Some((msg, _)) = rest.split_once('"')
    {
        return RewriteError::ApiMessage(msg.to_string());
    }
    RewriteError::Other(e.into())
}
