//! Scribe core: pure pipeline-status state machine and view-model helpers.
mod effect;
mod msg;
mod resolve;
mod snapshot;
mod stage;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use resolve::{active_step, resolve_all, resolve_step, StepUiState};
pub use snapshot::{format_timestamp, FileSnapshot, TranscriptSegment, TranscriptionResult};
pub use stage::{endpoint_for_status, StageDefinition, StageEndpoint, STAGES, STAGE_COUNT};
pub use state::ProgressState;
pub use status::PipelineStatus;
pub use update::update;
pub use view_model::{ProgressView, StepRowView};
