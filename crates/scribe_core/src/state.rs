use crate::view_model::{ProgressView, StepRowView};
use crate::{active_step, resolve_all, FileSnapshot, PipelineStatus, STAGES};

/// Client-side state for one job's progress view.
///
/// Holds the retained last-good snapshot, the loading flag, and a
/// displayable error. Request sequencing lives here too: every snapshot
/// fetch gets a fresh sequence number and only the reply matching the
/// latest one is applied, so overlapping refetches cannot clobber newer
/// data with a stale response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub(crate) snapshot: Option<FileSnapshot>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) next_seq: u64,
    pub(crate) inflight: Option<u64>,
    pub(crate) advance_inflight: bool,
    pub(crate) surface_advance_errors: bool,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store advance failures as displayable errors instead of surfacing
    /// them only through the step chips staying put.
    pub fn with_surfaced_advance_errors(mut self) -> Self {
        self.surface_advance_errors = true;
        self
    }

    pub fn snapshot(&self) -> Option<&FileSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn view(&self) -> ProgressView {
        let status_code = self
            .snapshot
            .as_ref()
            .map(|snapshot| snapshot.status)
            .unwrap_or(PipelineStatus::Uploaded.code());
        let states = resolve_all(status_code);
        let steps = STAGES
            .iter()
            .zip(states.iter())
            .map(|(stage, state)| StepRowView {
                label: stage.label,
                state: *state,
            })
            .collect();

        ProgressView {
            file_name: self.snapshot.as_ref().map(|snapshot| snapshot.name.clone()),
            status_code,
            steps,
            active_step: active_step(&states),
            loading: self.loading,
            error: self.error.clone(),
            complete: status_code >= PipelineStatus::DoneTranslation.code(),
        }
    }
}
