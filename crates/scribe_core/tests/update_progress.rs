use std::sync::Once;

use scribe_core::{
    update, Effect, FileSnapshot, Msg, PipelineStatus, ProgressState, StageEndpoint, StepUiState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn snapshot(status: u8) -> FileSnapshot {
    FileSnapshot {
        id: "job-1".to_string(),
        name: "interview.wav".to_string(),
        status,
        url: "http://127.0.0.1:5000/media/job-1".to_string(),
        created_at: "2026-08-30T10:00:00Z".to_string(),
    }
}

fn loaded_state(status: u8) -> ProgressState {
    let (state, effects) = update(ProgressState::new(), Msg::FetchRequested);
    let seq = match effects[0] {
        Effect::FetchSnapshot { seq } => seq,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq,
            result: Ok(snapshot(status)),
        },
    );
    state
}

#[test]
fn fetch_requested_enters_loading_and_emits_fetch() {
    init_logging();
    let (state, effects) = update(ProgressState::new(), Msg::FetchRequested);

    assert_eq!(effects, vec![Effect::FetchSnapshot { seq: 0 }]);
    assert!(state.view().loading);
    assert!(state.view().error.is_none());
}

#[test]
fn successful_fetch_stores_snapshot_and_clears_error() {
    init_logging();
    let state = loaded_state(PipelineStatus::ProcessingDiarization.code());
    let view = state.view();

    assert!(!view.loading);
    assert_eq!(view.file_name.as_deref(), Some("interview.wav"));
    assert_eq!(view.status_code, 3);
    assert_eq!(view.active_step, 1);
    assert_eq!(view.steps[1].state, StepUiState::Progress);
    assert!(!view.complete);
}

#[test]
fn failed_fetch_keeps_previous_snapshot() {
    init_logging();
    let state = loaded_state(PipelineStatus::DoneSpeakerId.code());

    let (state, effects) = update(state, Msg::FetchRequested);
    let seq = match effects[0] {
        Effect::FetchSnapshot { seq } => seq,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq,
            result: Err("network error: connection refused".to_string()),
        },
    );
    let view = state.view();

    assert!(!view.loading);
    assert_eq!(
        view.error.as_deref(),
        Some("network error: connection refused")
    );
    // Last good value survives the failed refresh.
    assert_eq!(view.status_code, PipelineStatus::DoneSpeakerId.code());
    assert_eq!(view.file_name.as_deref(), Some("interview.wav"));
}

#[test]
fn stale_reply_is_dropped() {
    init_logging();
    let (state, _effects) = update(ProgressState::new(), Msg::FetchRequested);
    let (state, effects) = update(state, Msg::FetchRequested);
    assert_eq!(effects, vec![Effect::FetchSnapshot { seq: 1 }]);

    // The reply to the first request lands after the second was issued.
    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq: 0,
            result: Ok(snapshot(PipelineStatus::Uploaded.code())),
        },
    );
    assert!(state.view().loading);
    assert!(state.snapshot().is_none());

    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq: 1,
            result: Ok(snapshot(PipelineStatus::DoneSpeakerId.code())),
        },
    );
    assert!(!state.view().loading);
    assert_eq!(state.view().status_code, PipelineStatus::DoneSpeakerId.code());
}

#[test]
fn start_stage_targets_endpoint_for_current_status() {
    init_logging();
    let state = loaded_state(PipelineStatus::DoneSpeakerId.code());

    let (_state, effects) = update(state, Msg::StartStageClicked);
    assert_eq!(
        effects,
        vec![Effect::AdvanceStage {
            endpoint: StageEndpoint::SpeakerDiarization,
        }]
    );
}

#[test]
fn start_stage_without_snapshot_is_ignored() {
    init_logging();
    let (_state, effects) = update(ProgressState::new(), Msg::StartStageClicked);
    assert!(effects.is_empty());
}

#[test]
fn start_stage_does_not_double_fire() {
    init_logging();
    let state = loaded_state(PipelineStatus::Uploaded.code());

    let (state, effects) = update(state, Msg::StartStageClicked);
    assert_eq!(effects.len(), 1);
    let (_state, effects) = update(state, Msg::StartStageClicked);
    assert!(effects.is_empty());
}

#[test]
fn advance_completion_always_refetches() {
    init_logging();
    let state = loaded_state(PipelineStatus::Uploaded.code());
    let (state, _effects) = update(state, Msg::StartStageClicked);

    let (state, effects) = update(state, Msg::AdvanceFinished { result: Ok(()) });
    assert!(matches!(effects[0], Effect::FetchSnapshot { .. }));
    assert!(state.view().loading);
}

#[test]
fn advance_failure_is_silent_by_default() {
    init_logging();
    let state = loaded_state(PipelineStatus::Uploaded.code());
    let (state, _effects) = update(state, Msg::StartStageClicked);

    let (state, effects) = update(
        state,
        Msg::AdvanceFinished {
            result: Err("http status 500".to_string()),
        },
    );
    // The refetch still proceeds; the status simply will not have moved.
    assert!(matches!(effects[0], Effect::FetchSnapshot { .. }));
    assert!(state.view().error.is_none());
}

#[test]
fn advance_failure_surfaces_when_configured() {
    init_logging();
    let (state, effects) = update(
        ProgressState::new().with_surfaced_advance_errors(),
        Msg::FetchRequested,
    );
    let seq = match effects[0] {
        Effect::FetchSnapshot { seq } => seq,
        other => panic!("unexpected effect {other:?}"),
    };
    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq,
            result: Ok(snapshot(PipelineStatus::Uploaded.code())),
        },
    );
    let (state, _effects) = update(state, Msg::StartStageClicked);
    let (state, _effects) = update(
        state,
        Msg::AdvanceFinished {
            result: Err("http status 500".to_string()),
        },
    );

    assert_eq!(state.view().error.as_deref(), Some("http status 500"));
}

#[test]
fn terminal_snapshot_completes_view() {
    init_logging();
    let state = loaded_state(PipelineStatus::DoneTranslation.code());
    let view = state.view();

    assert!(view.complete);
    assert_eq!(view.active_step, view.steps.len());
    assert!(view
        .steps
        .iter()
        .all(|step| step.state == StepUiState::Done));
}
