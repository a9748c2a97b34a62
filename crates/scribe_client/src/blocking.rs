use crate::client::{ApiSettings, PipelineApi, ReqwestPipelineApi};
use crate::types::{ApiError, ApiErrorKind};
use scribe_core::{FileSnapshot, StageEndpoint, TranscriptionResult};

/// Synchronous facade over [`ReqwestPipelineApi`] for the one-shot CLI
/// commands, which have no event loop to feed.
pub struct BlockingPipelineApi {
    runtime: tokio::runtime::Runtime,
    api: ReqwestPipelineApi,
}

impl BlockingPipelineApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| ApiError::new(ApiErrorKind::Runtime, err.to_string()))?;
        Ok(Self {
            runtime,
            api: ReqwestPipelineApi::new(settings)?,
        })
    }

    pub fn fetch_snapshot(&self, id: &str) -> Result<FileSnapshot, ApiError> {
        self.runtime.block_on(self.api.fetch_snapshot(id))
    }

    pub fn upload(
        &self,
        name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<FileSnapshot, ApiError> {
        self.runtime.block_on(self.api.upload(name, file_name, bytes))
    }

    pub fn advance(&self, endpoint: StageEndpoint, id: &str) -> Result<(), ApiError> {
        self.runtime.block_on(self.api.advance(endpoint, id))
    }

    pub fn fetch_result(&self, id: &str) -> Result<TranscriptionResult, ApiError> {
        self.runtime.block_on(self.api.fetch_result(id))
    }
}
