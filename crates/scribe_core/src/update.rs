use crate::{endpoint_for_status, Effect, Msg, ProgressState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ProgressState, msg: Msg) -> (ProgressState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => vec![begin_fetch(&mut state)],
        Msg::SnapshotArrived { seq, result } => {
            if state.inflight != Some(seq) {
                // A newer request is already underway; drop the stale reply.
                return (state, Vec::new());
            }
            state.inflight = None;
            state.loading = false;
            match result {
                Ok(snapshot) => {
                    state.snapshot = Some(snapshot);
                    state.error = None;
                }
                Err(message) => {
                    // Keep the previous payload so the last good view
                    // survives a failed refresh.
                    state.error = Some(message);
                }
            }
            Vec::new()
        }
        Msg::StartStageClicked => {
            if state.advance_inflight {
                return (state, Vec::new());
            }
            match &state.snapshot {
                Some(snapshot) => {
                    state.advance_inflight = true;
                    vec![Effect::AdvanceStage {
                        endpoint: endpoint_for_status(snapshot.status),
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::AdvanceFinished { result } => {
            state.advance_inflight = false;
            if let Err(message) = result {
                if state.surface_advance_errors {
                    state.error = Some(message);
                }
            }
            // Success or failure, the next rendered state always comes from
            // a fresh server read; nothing is advanced locally.
            vec![begin_fetch(&mut state)]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_fetch(state: &mut ProgressState) -> Effect {
    let seq = state.next_seq;
    state.next_seq += 1;
    state.inflight = Some(seq);
    state.loading = true;
    Effect::FetchSnapshot { seq }
}
