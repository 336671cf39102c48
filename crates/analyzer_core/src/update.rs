use crate::{AppState, Effect, Msg, Phase, SubmitPayload};

const EMPTY_INPUT_NOTICE: &str = "Please enter terms and conditions text, or a URL.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_text_input(text);
            Vec::new()
        }
        Msg::UrlChanged(url) => {
            state.set_url_input(url);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            if matches!(state.phase(), Phase::Submitting) {
                // Re-entrant submit is ignored; the view also disables the
                // control via `can_submit`.
                return (state, Vec::new());
            }
            match select_payload(state.text_input(), state.url_input()) {
                Some(payload) => {
                    let reveal_running = state.reveal_in_progress();
                    let generation = state.begin_submission();
                    let mut effects = Vec::with_capacity(3);
                    if reveal_running {
                        // The previous success is being replaced; its
                        // reveal timer must not tick against the new
                        // submission.
                        effects.push(Effect::StopReveal);
                    }
                    effects.push(Effect::Submit {
                        generation,
                        payload,
                    });
                    effects.push(Effect::StartRotation);
                    effects
                }
                None => {
                    state.set_notice(EMPTY_INPUT_NOTICE);
                    Vec::new()
                }
            }
        }
        Msg::UseActiveTabClicked => vec![Effect::QueryActiveTab],
        Msg::ActiveTabResolved(Ok(url)) => {
            state.set_url_input(url);
            Vec::new()
        }
        Msg::ActiveTabResolved(Err(message)) => {
            state.set_notice(message);
            Vec::new()
        }
        Msg::SubmissionResolved {
            generation,
            outcome,
        } => {
            if state.is_stale(generation) {
                // A newer submission superseded this one; drop it so the
                // latest-issued request always wins.
                return (state, Vec::new());
            }
            let mut effects = vec![Effect::StopRotation];
            match outcome {
                Ok(outcome) => {
                    state.apply_success(outcome);
                    // Empty feedback is complete at creation; starting a
                    // timer for it would leave nothing to stop it.
                    if state.reveal_in_progress() {
                        effects.push(Effect::StartReveal);
                    }
                }
                Err(message) => state.apply_failure(message),
            }
            effects
        }
        Msg::RotationTick => {
            if matches!(state.phase(), Phase::Submitting) {
                state.advance_rotation();
            }
            Vec::new()
        }
        Msg::RevealTick => match state.advance_reveal() {
            Some(true) => vec![Effect::StopReveal],
            Some(false) | None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Pick what to send: a non-empty URL wins over text, whitespace-only
/// input counts as empty. `None` means the click is a validation failure
/// and nothing leaves the machine.
fn select_payload(text: &str, url: &str) -> Option<SubmitPayload> {
    let trimmed_url = url.trim();
    if !trimmed_url.is_empty() {
        return Some(SubmitPayload::PageUrl(trimmed_url.to_string()));
    }
    if !text.trim().is_empty() {
        return Some(SubmitPayload::Text(text.to_string()));
    }
    None
}
