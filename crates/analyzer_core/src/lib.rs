//! Analyzer core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod reveal;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, SubmitPayload};
pub use msg::Msg;
pub use reveal::Reveal;
pub use state::{AnalysisOutcome, AppState, Generation, Phase, LOADING_MESSAGES};
pub use update::update;
pub use view_model::AppViewModel;
