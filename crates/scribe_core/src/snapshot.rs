use serde::{Deserialize, Deserializer, Serialize};

/// The client's cached copy of the server-side job record. Read-only here;
/// the server mutates it as processing runs, and the only client-triggered
/// mutation goes through the advance endpoint followed by a refetch.
///
/// `status` stays a raw wire ordinal so codes newer than this build still
/// order correctly; decode to [`crate::PipelineStatus`] at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSnapshot {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "status_code")]
    pub status: u8,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

// The backend has historically sent the status both as a number and as a
// numeric string; accept either.
fn status_code<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u8),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(code) => Ok(code),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Final transcript for one job, as returned by the results endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub id: String,
    #[serde(rename = "totalSpeakers")]
    pub total_speakers: u32,
    pub segment: Vec<TranscriptSegment>,
}

/// One speaker-attributed slice of the transcript. `start`/`end` are in
/// milliseconds from the beginning of the recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub start: u64,
    pub end: u64,
    pub transcript: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub translate: String,
}

/// Millisecond timestamp rendered as `M:SS` for transcript display.
pub fn format_timestamp(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
