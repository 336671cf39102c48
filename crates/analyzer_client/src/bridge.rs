use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_info;

use crate::client::AnalysisApi;
use crate::{AnalysisError, AnalysisRequest, AnalysisResult, Generation};

enum ClientCommand {
    Submit {
        generation: Generation,
        request: AnalysisRequest,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Resolved {
        generation: Generation,
        result: Result<AnalysisResult, AnalysisError>,
    },
}

/// Bridge between the synchronous app loop and the async client: commands
/// go in over a channel, a dedicated thread runs them on a tokio runtime,
/// resolutions come back as events. An in-flight request is never
/// cancelled; it runs to completion or transport failure.
#[derive(Clone)]
pub struct SubmitHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl SubmitHandle {
    pub fn new(api: Arc<dyn AnalysisApi>) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, generation: Generation, request: AnalysisRequest) {
        client_info!("submitting analysis request, generation={generation}");
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            generation,
            request,
        });
    }
}

async fn handle_command(
    api: &dyn AnalysisApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit {
            generation,
            request,
        } => {
            let result = api.submit(&request).await;
            let _ = event_tx.send(ClientEvent::Resolved { generation, result });
        }
    }
}
