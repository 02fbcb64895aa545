use std::time::Duration;

/// Typed error hierarchy for the provider generation path.
///
/// The orchestrator never distinguishes variants beyond logging: every one of
/// them degrades the request to the deterministic fallback bank.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),
    #[error("provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),
    #[error("malformed provider response: {0}")]
    Malformed(String),
    #[error("insufficient valid questions after filtering: {accepted} of {requested}")]
    Insufficient { accepted: usize, requested: usize },
}

impl ProviderError {
    /// Short classification string for logging/metrics.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "missing_credential",
            Self::Http { .. } => "http_status",
            Self::Network(_) => "network_error",
            Self::Timeout(_) => "timeout",
            Self::Malformed(_) => "malformed_response",
            Self::Insufficient { .. } => "insufficient_questions",
        }
    }
}
