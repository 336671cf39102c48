use crate::reveal::Reveal;
use crate::view_model::AppViewModel;

pub type Generation = u64;

/// Messages cycled through while a submission is in flight. Purely
/// cosmetic; independent of the network call's actual progress.
pub const LOADING_MESSAGES: [&str; 4] = [
    "Analyzing terms...",
    "Reading the fine print...",
    "Flagging risky clauses...",
    "Scoring overall safety...",
];

/// Normalized outcome of a successful analysis, as the view layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub feedback: String,
    pub score: Option<f64>,
}

/// Lifecycle of the single outstanding submission. Exactly one variant is
/// active; a new submission replaces any prior outcome wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success(AnalysisOutcome),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    text_input: String,
    url_input: String,
    notice: Option<String>,
    phase: Phase,
    generation: Generation,
    rotation_index: usize,
    reveal: Option<Reveal>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = matches!(self.phase, Phase::Submitting);
        let (score, error) = match &self.phase {
            Phase::Success(outcome) => (outcome.score, None),
            Phase::Failure(message) => (None, Some(message.clone())),
            Phase::Idle | Phase::Submitting => (None, None),
        };
        AppViewModel {
            text_input: self.text_input.clone(),
            url_input: self.url_input.clone(),
            submitting,
            can_submit: !submitting,
            loading_message: submitting
                .then(|| LOADING_MESSAGES[self.rotation_index].to_string()),
            score,
            feedback: self.reveal.as_ref().map(|r| r.displayed().to_string()),
            reveal_complete: self.reveal.as_ref().is_some_and(Reveal::is_complete),
            error,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub(crate) fn set_text_input(&mut self, text: String) {
        self.text_input = text;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_url_input(&mut self, url: String) {
        self.url_input = url;
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.mark_dirty();
    }

    /// Enter `Submitting`: clears any previous outcome, reveal and notice
    /// so stale content never renders during the new in-flight request.
    /// Returns the generation token the resolution must carry.
    pub(crate) fn begin_submission(&mut self) -> Generation {
        self.phase = Phase::Submitting;
        self.notice = None;
        self.reveal = None;
        self.rotation_index = 0;
        self.generation += 1;
        self.mark_dirty();
        self.generation
    }

    pub(crate) fn is_stale(&self, generation: Generation) -> bool {
        generation != self.generation || !matches!(self.phase, Phase::Submitting)
    }

    /// True while a reveal exists and has characters left to show, i.e.
    /// its timer is expected to be running.
    pub(crate) fn reveal_in_progress(&self) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|reveal| !reveal.is_complete())
    }

    pub(crate) fn apply_success(&mut self, outcome: AnalysisOutcome) {
        self.reveal = Some(Reveal::new(outcome.feedback.clone()));
        self.phase = Phase::Success(outcome);
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.reveal = None;
        self.phase = Phase::Failure(message);
        self.mark_dirty();
    }

    pub(crate) fn advance_rotation(&mut self) {
        self.rotation_index = (self.rotation_index + 1) % LOADING_MESSAGES.len();
        self.mark_dirty();
    }

    /// Advance the reveal by one character. `None` when no reveal is
    /// running (or it already finished); `Some(true)` on the tick that
    /// completes it.
    pub(crate) fn advance_reveal(&mut self) -> Option<bool> {
        let reveal = self.reveal.as_mut()?;
        if reveal.is_complete() {
            return None;
        }
        let done = reveal.tick();
        self.mark_dirty();
        Some(done)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
