//! Analyzer client: request submission and host capabilities.
mod bridge;
mod client;
mod config;
mod host;
mod types;

pub use bridge::{ClientEvent, SubmitHandle};
pub use client::{AnalysisApi, ReqwestAnalysisClient, ACCESS_TOKEN_HEADER};
pub use config::{
    ClientConfig, ConfigError, DEFAULT_ENDPOINT, DEFAULT_TOKEN, ENDPOINT_ENV, TOKEN_ENV,
};
pub use host::{ActiveTabProbe, HostError, NoHost};
pub use types::{AnalysisError, AnalysisRequest, AnalysisResult, FailureKind, Generation};
