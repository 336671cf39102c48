use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use analyzer_client::{
    ActiveTabProbe, AnalysisApi, AnalysisRequest, ClientEvent, SubmitHandle,
};
use analyzer_core::{AnalysisOutcome, Effect, Msg, SubmitPayload};
use client_logging::{client_info, client_warn};

use crate::timers::RepeatingTimer;

/// Loading-message rotation cadence.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(3000);
/// Feedback reveal cadence, one character per tick.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(40);

/// Executes the effects the pure core emits: submissions go through the
/// client bridge, timer effects start/cancel the two repeating timers,
/// and the active-tab query hits the injected host probe.
pub struct EffectRunner {
    submit: SubmitHandle,
    probe: Arc<dyn ActiveTabProbe>,
    msg_tx: mpsc::Sender<Msg>,
    rotation: RepeatingTimer,
    reveal: RepeatingTimer,
}

impl EffectRunner {
    pub fn new(
        api: Arc<dyn AnalysisApi>,
        probe: Arc<dyn ActiveTabProbe>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        let (submit, event_rx) = SubmitHandle::new(api);
        spawn_event_loop(event_rx, msg_tx.clone());
        Self {
            submit,
            probe,
            msg_tx: msg_tx.clone(),
            rotation: RepeatingTimer::new(ROTATION_INTERVAL),
            reveal: RepeatingTimer::new(REVEAL_INTERVAL),
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    generation,
                    payload,
                } => {
                    client_info!("Submit generation={generation}");
                    self.submit.submit(generation, map_payload(payload));
                }
                Effect::StartRotation => self
                    .rotation
                    .start(self.msg_tx.clone(), Msg::RotationTick),
                Effect::StopRotation => self.rotation.cancel(),
                Effect::StartReveal => self.reveal.start(self.msg_tx.clone(), Msg::RevealTick),
                Effect::StopReveal => self.reveal.cancel(),
                Effect::QueryActiveTab => {
                    let resolved = self
                        .probe
                        .active_tab_url()
                        .map_err(|err| err.to_string());
                    let _ = self.msg_tx.send(Msg::ActiveTabResolved(resolved));
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let ClientEvent::Resolved { generation, result } = event;
            let outcome = result
                .map(|result| AnalysisOutcome {
                    feedback: result.feedback,
                    score: result.score,
                })
                .map_err(|err| {
                    client_warn!("analysis failed ({}): {}", err.kind, err.message);
                    err.message
                });
            let _ = msg_tx.send(Msg::SubmissionResolved {
                generation,
                outcome,
            });
        }
    });
}

fn map_payload(payload: SubmitPayload) -> AnalysisRequest {
    match payload {
        SubmitPayload::Text(text) => AnalysisRequest::Text(text),
        SubmitPayload::PageUrl(url) => AnalysisRequest::PageUrl(url),
    }
}
