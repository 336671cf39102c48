/// Capability interface over the host browser's active-tab query. The
/// core only ever consumes the resulting string; injecting the capability
/// keeps it testable without a browser host.
pub trait ActiveTabProbe: Send + Sync {
    fn active_tab_url(&self) -> Result<String, HostError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host browser API is not present in this environment.
    #[error("host API not available")]
    Unavailable,
}

/// Environments without a host browser (plain web page, CLI, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHost;

impl ActiveTabProbe for NoHost {
    fn active_tab_url(&self) -> Result<String, HostError> {
        Err(HostError::Unavailable)
    }
}
