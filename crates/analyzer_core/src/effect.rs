use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the selected payload to the analysis service.
    Submit {
        generation: Generation,
        payload: SubmitPayload,
    },
    /// Start the loading-message rotation timer.
    StartRotation,
    /// Cancel the loading-message rotation timer.
    StopRotation,
    /// Start the feedback reveal timer.
    StartReveal,
    /// Cancel the feedback reveal timer.
    StopReveal,
    /// Ask the host for the active tab's URL.
    QueryActiveTab,
}

/// What gets sent to the service: raw terms text, or a page URL to fetch
/// server-side. Exactly one per submission; a non-empty URL wins over text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPayload {
    Text(String),
    PageUrl(String),
}
