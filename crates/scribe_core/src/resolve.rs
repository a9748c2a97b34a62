use crate::stage::{StageDefinition, STAGES, STAGE_COUNT};

/// Derived per-stage display state. Never stored; recomputed from the
/// current status on every render. `Ord` follows pipeline progression, so a
/// stage's state can only move forward as the status code grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StepUiState {
    Pending,
    Start,
    Progress,
    Done,
}

/// Resolve one stage against the current raw status code.
///
/// Completion is a threshold (`>=`), not an exact match, so stages already
/// passed stay `Done` as the global status advances. `Start` and `Progress`
/// are exact matches because each is a single point on the status axis.
pub fn resolve_step(current: u8, stage: &StageDefinition) -> StepUiState {
    if current >= stage.done.code() {
        return StepUiState::Done;
    }
    if current == stage.progress.code() {
        return StepUiState::Progress;
    }
    if current == stage.ready.code() {
        return StepUiState::Start;
    }
    StepUiState::Pending
}

/// Resolve every stage of the fixed pipeline at once.
pub fn resolve_all(current: u8) -> [StepUiState; STAGE_COUNT] {
    std::array::from_fn(|index| resolve_step(current, &STAGES[index]))
}

/// Index of the stage to highlight as current: the first one not yet done.
/// Returns `states.len()` as an "all complete" sentinel.
pub fn active_step(states: &[StepUiState]) -> usize {
    states
        .iter()
        .position(|state| *state != StepUiState::Done)
        .unwrap_or(states.len())
}
