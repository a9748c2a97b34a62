use crate::StageEndpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Read the job snapshot from the server. `seq` tags the request so a
    /// reply that arrives after a newer request started can be dropped.
    FetchSnapshot { seq: u64 },
    /// Ask the server to run the given processing stage for this job.
    AdvanceStage { endpoint: StageEndpoint },
}
