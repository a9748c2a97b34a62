//! Scribe client: REST access to the media-processing backend and the
//! effect driver that bridges it to the pure core state machine.
mod blocking;
mod client;
mod driver;
mod endpoints;
mod types;

pub use blocking::BlockingPipelineApi;
pub use client::{ApiSettings, PipelineApi, ReqwestPipelineApi};
pub use driver::{ClientEvent, ClientHandle};
pub use endpoints::{ApiUrls, DEFAULT_BASE_URL};
pub use types::{ApiError, ApiErrorKind};
