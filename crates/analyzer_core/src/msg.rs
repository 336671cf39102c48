use crate::{AnalysisOutcome, Generation};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the terms text box.
    TextChanged(String),
    /// User edited the page URL box.
    UrlChanged(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// User asked to fill the URL box from the host's active tab.
    UseActiveTabClicked,
    /// Host answered the active-tab query (error is already user-facing text).
    ActiveTabResolved(Result<String, String>),
    /// The submission for `generation` finished.
    SubmissionResolved {
        generation: Generation,
        outcome: Result<AnalysisOutcome, String>,
    },
    /// Loading-message rotation tick (cadence owned by the app).
    RotationTick,
    /// Feedback reveal tick (cadence owned by the app).
    RevealTick,
    /// Fallback for placeholder wiring.
    NoOp,
}
