use crate::StepUiState;

/// One row of the linear step indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRowView {
    pub label: &'static str,
    pub state: StepUiState,
}

/// Everything a renderer needs to draw the progress page for one job.
/// Derived fresh from [`crate::ProgressState`] on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub file_name: Option<String>,
    /// Raw status ordinal the steps were resolved against.
    pub status_code: u8,
    pub steps: Vec<StepRowView>,
    /// Index of the highlighted stage; `steps.len()` once all are done.
    pub active_step: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub complete: bool,
}
