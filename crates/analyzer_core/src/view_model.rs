#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub text_input: String,
    pub url_input: String,
    pub submitting: bool,
    /// False while a submission is in flight; the presentation layer
    /// disables the Analyze control from this.
    pub can_submit: bool,
    /// Current rotation entry; `Some` only while submitting.
    pub loading_message: Option<String>,
    pub score: Option<f64>,
    /// Revealed prefix of the feedback text; `Some` only after a success.
    pub feedback: Option<String>,
    pub reveal_complete: bool,
    pub error: Option<String>,
    /// Input validation / host capability notice, shown without leaving
    /// the current phase.
    pub notice: Option<String>,
    pub dirty: bool,
}
