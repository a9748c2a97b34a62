use scribe_core::StageEndpoint;

/// Backend reachable on the local loopback unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// URL builders for the pipeline backend, one method per REST surface.
#[derive(Debug, Clone)]
pub struct ApiUrls {
    base: String,
}

impl ApiUrls {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// `POST /files` — multipart upload.
    pub fn upload_file(&self) -> String {
        format!("{}/files", self.base)
    }

    /// `GET /files/{id}` — current job snapshot.
    pub fn file_by_id(&self, id: &str) -> String {
        format!("{}/files/{}", self.base, id)
    }

    /// `PUT /files/{endpoint}/{id}` — advance one processing stage.
    pub fn advance(&self, endpoint: StageEndpoint, id: &str) -> String {
        format!("{}/files/{}/{}", self.base, endpoint.path(), id)
    }

    /// `GET /files/results/{id}` — final transcript.
    pub fn result_by_id(&self, id: &str) -> String {
        format!("{}/files/results/{}", self.base, id)
    }
}
