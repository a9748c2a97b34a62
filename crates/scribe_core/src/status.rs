/// Server-reported position of a job within the processing pipeline.
///
/// Discriminants are the wire ordinals. The server only ever moves a job
/// forward along this axis; the client observes, it never computes the
/// next value itself. `Ord` follows declaration order, so threshold
/// comparisons are plain ordinal comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PipelineStatus {
    Uploaded = 0,
    ProcessingSpeakerId = 1,
    DoneSpeakerId = 2,
    ProcessingDiarization = 3,
    DoneDiarization = 4,
    ProcessingAsr = 5,
    DoneAsr = 6,
    ProcessingLangId = 7,
    DoneLangId = 8,
    ProcessingTranslation = 9,
    DoneTranslation = 10,
}

impl PipelineStatus {
    /// The integer code used on the wire.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Strict decode of a wire code. Unknown codes return `None`; callers
    /// that only need ordering keep the raw `u8` instead.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Uploaded),
            1 => Some(Self::ProcessingSpeakerId),
            2 => Some(Self::DoneSpeakerId),
            3 => Some(Self::ProcessingDiarization),
            4 => Some(Self::DoneDiarization),
            5 => Some(Self::ProcessingAsr),
            6 => Some(Self::DoneAsr),
            7 => Some(Self::ProcessingLangId),
            8 => Some(Self::DoneLangId),
            9 => Some(Self::ProcessingTranslation),
            10 => Some(Self::DoneTranslation),
            _ => None,
        }
    }

    /// True once the whole pipeline has run.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::DoneTranslation)
    }
}
