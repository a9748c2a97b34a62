use crate::status::PipelineStatus;

/// Number of stages in the processing pipeline.
pub const STAGE_COUNT: usize = 5;

/// One named unit of the processing pipeline, with the three status values
/// that bound it on the status axis: the value at which it becomes ready to
/// start, the value while it runs, and the value marking it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDefinition {
    pub label: &'static str,
    pub ready: PipelineStatus,
    pub progress: PipelineStatus,
    pub done: PipelineStatus,
}

/// The fixed pipeline, in order. Stage `i`'s `done` value doubles as stage
/// `i + 1`'s `ready` value; `stage_thresholds_are_chained` in the tests
/// asserts the chaining and the strict increase within each stage.
pub const STAGES: [StageDefinition; STAGE_COUNT] = [
    StageDefinition {
        label: "Speaker Identification",
        ready: PipelineStatus::Uploaded,
        progress: PipelineStatus::ProcessingSpeakerId,
        done: PipelineStatus::DoneSpeakerId,
    },
    StageDefinition {
        label: "Speaker Diarization",
        ready: PipelineStatus::DoneSpeakerId,
        progress: PipelineStatus::ProcessingDiarization,
        done: PipelineStatus::DoneDiarization,
    },
    StageDefinition {
        label: "Speech Recognition",
        ready: PipelineStatus::DoneDiarization,
        progress: PipelineStatus::ProcessingAsr,
        done: PipelineStatus::DoneAsr,
    },
    StageDefinition {
        label: "Language Identification",
        ready: PipelineStatus::DoneAsr,
        progress: PipelineStatus::ProcessingLangId,
        done: PipelineStatus::DoneLangId,
    },
    StageDefinition {
        label: "Neural Translation",
        ready: PipelineStatus::DoneLangId,
        progress: PipelineStatus::ProcessingTranslation,
        done: PipelineStatus::DoneTranslation,
    },
];

/// Server-side processing endpoint for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEndpoint {
    SpeakerIdentification,
    SpeakerDiarization,
    SpeechRecognition,
    LanguageIdentification,
    NeuralTranslation,
}

impl StageEndpoint {
    /// URL path segment under `/files/` for this endpoint.
    pub const fn path(self) -> &'static str {
        match self {
            Self::SpeakerIdentification => "speaker-identification",
            Self::SpeakerDiarization => "speaker-diarization",
            Self::SpeechRecognition => "speech-recognition",
            Self::LanguageIdentification => "language-identification",
            Self::NeuralTranslation => "neural-translation",
        }
    }
}

/// Which processing endpoint a "start next stage" request targets for a job
/// currently at `code`. Keyed on the exact ready values; anything else,
/// including codes this build does not know, falls back to the first stage.
pub fn endpoint_for_status(code: u8) -> StageEndpoint {
    match PipelineStatus::from_code(code) {
        Some(PipelineStatus::DoneSpeakerId) => StageEndpoint::SpeakerDiarization,
        Some(PipelineStatus::DoneDiarization) => StageEndpoint::SpeechRecognition,
        Some(PipelineStatus::DoneAsr) => StageEndpoint::LanguageIdentification,
        Some(PipelineStatus::DoneLangId) => StageEndpoint::NeuralTranslation,
        _ => StageEndpoint::SpeakerIdentification,
    }
}
