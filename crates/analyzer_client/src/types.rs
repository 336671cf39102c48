use serde::Serialize;

/// Token tying a submission to its eventual resolution, so the app can
/// drop resolutions that a newer submission has superseded.
pub type Generation = u64;

/// Body of the analyze request. Externally tagged so exactly one of
/// `{"text": ...}` or `{"url": ...}` goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnalysisRequest {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "url")]
    PageUrl(String),
}

impl AnalysisRequest {
    /// Select the payload from the two input boxes: a non-empty URL wins
    /// over text, whitespace-only input counts as empty. `None` is a
    /// validation failure the caller handles before any request exists.
    pub fn from_inputs(text: &str, url: &str) -> Option<Self> {
        let trimmed_url = url.trim();
        if !trimmed_url.is_empty() {
            return Some(Self::PageUrl(trimmed_url.to_string()));
        }
        if !text.trim().is_empty() {
            return Some(Self::Text(text.to_string()));
        }
        None
    }
}

/// Normalized reply from a successful, well-formed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub feedback: String,
    /// Safety score 0-100; the server may omit it.
    pub score: Option<f64>,
}

/// Any failure on the submission path. `message` is the user-visible
/// text and is rendered verbatim by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AnalysisError {
    pub kind: FailureKind,
    pub message: String,
    /// Raw body text, kept only for the unexpected-content-type path.
    pub raw_body: Option<String>,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            raw_body: None,
        }
    }

    pub(crate) fn with_raw_body(
        kind: FailureKind,
        message: impl Into<String>,
        raw_body: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            raw_body: Some(raw_body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    /// Transport-level failure (DNS, refused connection, timeout).
    #[error("network error")]
    Network,
    /// Non-success HTTP status with a JSON body.
    #[error("http status {0}")]
    HttpStatus(u16),
    /// Declared JSON content type, but the body would not parse.
    #[error("invalid json (status {0})")]
    InvalidJson(u16),
    /// Declared content type was not JSON; terminal on any status.
    #[error("unexpected content type {0:?}")]
    UnexpectedContentType(String),
}
