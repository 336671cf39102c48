use client_logging::client_warn;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::{AnalysisError, AnalysisRequest, AnalysisResult, ClientConfig, FailureKind};

/// Header carrying the static access token the service expects.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Shape of the service's JSON replies. Every field is optional: success
/// bodies carry `feedback`/`score`, failure bodies carry `error`, and an
/// empty object is legal on both paths.
#[derive(Debug, Default, Deserialize)]
struct ServerReply {
    feedback: Option<String>,
    score: Option<f64>,
    error: Option<String>,
}

#[async_trait::async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Send one analysis request and normalize the heterogeneous reply
    /// into a typed result or typed error. No retries.
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ReqwestAnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl AnalysisApi for ReqwestAnalysisClient {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .client
            .post(self.config.analyze_endpoint())
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !declares_json(&content_type) {
            // Terminal even on a success status: a non-JSON body is never
            // promoted to a result.
            let body = response.text().await.map_err(map_transport_error)?;
            return Err(AnalysisError::with_raw_body(
                FailureKind::UnexpectedContentType(content_type.clone()),
                format!("Unexpected response content-type ({content_type})"),
                body,
            ));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let reply: ServerReply = match serde_json::from_str(&body) {
            Ok(reply) => reply,
            Err(err) => {
                client_warn!("malformed JSON reply (status {status}): {err}");
                return Err(AnalysisError::new(
                    FailureKind::InvalidJson(status.as_u16()),
                    format!("Invalid JSON response (status {})", status.as_u16()),
                ));
            }
        };

        if !status.is_success() {
            let message = reply
                .error
                .unwrap_or_else(|| format!("Request failed: {}", status.as_u16()));
            return Err(AnalysisError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        Ok(AnalysisResult {
            feedback: reply
                .feedback
                .unwrap_or_else(|| "No feedback returned".to_string()),
            score: reply.score,
        })
    }
}

fn declares_json(content_type: &str) -> bool {
    let ct = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim();
    ct.eq_ignore_ascii_case(JSON_CONTENT_TYPE)
}

/// Deliberate information-loss point: the transport detail is logged and
/// the user sees a generic message.
fn map_transport_error(err: reqwest::Error) -> AnalysisError {
    client_warn!("transport failure: {err}");
    AnalysisError::new(FailureKind::Network, "Network error")
}
