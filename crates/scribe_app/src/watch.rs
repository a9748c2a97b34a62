use std::sync::mpsc;
use std::time::Duration;

use scribe_client::ApiSettings;
use scribe_core::{update, Msg, ProgressState, ProgressView, StepUiState};

use crate::effects::EffectRunner;
use crate::render;

/// Polling loop for one job: drive the core state machine from network
/// events, refresh on a timer, optionally auto-start each ready stage, and
/// stop once the pipeline is complete.
pub fn run(
    settings: &ApiSettings,
    id: &str,
    interval: Duration,
    auto: bool,
    strict: bool,
) -> Result<(), String> {
    let (msg_tx, msg_rx) = mpsc::channel();
    let runner = EffectRunner::new(settings, id, msg_tx).map_err(|err| err.to_string())?;

    let mut state = if strict {
        ProgressState::new().with_surfaced_advance_errors()
    } else {
        ProgressState::new()
    };

    let (next, effects) = update(state, Msg::FetchRequested);
    state = next;
    runner.run(effects);

    let mut last_view: Option<ProgressView> = None;
    loop {
        match msg_rx.recv_timeout(interval) {
            Ok(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // Poll tick. Skip if a fetch is already underway; its reply
                // will arrive on its own.
                if !state.view().loading {
                    let (next, effects) = update(state, Msg::FetchRequested);
                    state = next;
                    runner.run(effects);
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err("network driver stopped unexpectedly".to_string());
            }
        }

        let view = state.view();
        if last_view.as_ref() != Some(&view) {
            render::render_progress(&view);
            last_view = Some(view.clone());
        }

        if view.complete {
            println!("Run `scribe result {id}` to see the transcript.");
            return Ok(());
        }

        if auto {
            let ready = view
                .steps
                .get(view.active_step)
                .is_some_and(|step| step.state == StepUiState::Start);
            if ready {
                let (next, effects) = update(state, Msg::StartStageClicked);
                state = next;
                runner.run(effects);
            }
        }
    }
}
