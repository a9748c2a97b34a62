use std::sync::mpsc;
use std::thread;

use client_logging::client_info;
use scribe_client::{ApiError, ApiSettings, ClientEvent, ClientHandle};
use scribe_core::{Effect, Msg};

/// Hands core effects to the network driver and feeds its events back into
/// the state-machine loop as messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(
        settings: &ApiSettings,
        job_id: &str,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, ApiError> {
        let (event_tx, event_rx) = mpsc::channel();
        let client = ClientHandle::new(settings, job_id, event_tx)?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { client })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::FetchSnapshot { seq } => client_info!("fetch snapshot seq={}", seq),
                Effect::AdvanceStage { endpoint } => {
                    client_info!("advance stage endpoint={}", endpoint.path())
                }
            }
            self.client.run_effect(effect);
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                ClientEvent::SnapshotFetched { seq, result } => Msg::SnapshotArrived {
                    seq,
                    result: result.map_err(|err| err.to_string()),
                },
                ClientEvent::AdvanceCompleted { result } => Msg::AdvanceFinished {
                    result: result.map_err(|err| err.to_string()),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
