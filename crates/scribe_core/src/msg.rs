use crate::FileSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial load, poll tick, or user-triggered refresh.
    FetchRequested,
    /// A snapshot request settled; `seq` says which one.
    SnapshotArrived {
        seq: u64,
        result: Result<FileSnapshot, String>,
    },
    /// User asked to start the next ready stage.
    StartStageClicked,
    /// The advance request settled, successfully or not.
    AdvanceFinished { result: Result<(), String> },
    /// Fallback for placeholder wiring.
    NoOp,
}
