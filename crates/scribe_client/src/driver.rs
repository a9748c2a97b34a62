use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_warn;

use crate::client::{ApiSettings, PipelineApi, ReqwestPipelineApi};
use crate::types::ApiError;
use scribe_core::{Effect, FileSnapshot};

/// Network outcome flowing back to the state-machine loop. The app maps
/// these onto core `Msg`s.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    SnapshotFetched {
        seq: u64,
        result: Result<FileSnapshot, ApiError>,
    },
    AdvanceCompleted {
        result: Result<(), ApiError>,
    },
}

/// Runs core effects for one job against the backend on a background
/// thread with its own tokio runtime. Requests are spawned as they
/// arrive and are neither sequenced nor cancelled; the core's fencing
/// decides which snapshot reply wins.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<Effect>,
}

impl ClientHandle {
    pub fn new(
        settings: &ApiSettings,
        job_id: impl Into<String>,
        event_tx: mpsc::Sender<ClientEvent>,
    ) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Effect>();
        let api = Arc::new(ReqwestPipelineApi::new(settings)?);
        let job_id = job_id.into();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("client runtime failed to start: {}", err);
                    return;
                }
            };
            while let Ok(effect) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                let job_id = job_id.clone();
                runtime.spawn(async move {
                    run_effect(api.as_ref(), &job_id, effect, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.cmd_tx.send(effect);
    }

    pub fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }
}

async fn run_effect(
    api: &dyn PipelineApi,
    job_id: &str,
    effect: Effect,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match effect {
        Effect::FetchSnapshot { seq } => {
            let result = api.fetch_snapshot(job_id).await;
            let _ = event_tx.send(ClientEvent::SnapshotFetched { seq, result });
        }
        Effect::AdvanceStage { endpoint } => {
            let result = api.advance(endpoint, job_id).await;
            if let Err(err) = &result {
                client_warn!("advance {} failed: {}", endpoint.path(), err);
            }
            let _ = event_tx.send(ClientEvent::AdvanceCompleted { result });
        }
    }
}
