use crate::error::CompareError;
use crate::types::{AlignmentOp, LanguageTag, PhonemeSequence};

/// Text-to-phoneme backend, injected at comparator construction so the
/// phonemization strategy is swappable (no hardcoded native libraries).
pub trait Phonemizer: Send + Sync {
    fn supports(&self, language: &LanguageTag) -> bool;

    fn phonemize(
        &self,
        text: &str,
        language: &LanguageTag,
    ) -> Result<PhonemeSequence, CompareError>;
}

pub trait SequenceAligner: Send + Sync {
    fn align(
        &self,
        reference: &PhonemeSequence,
        hypothesis: &PhonemeSequence,
    ) -> Result<Vec<AlignmentOp>, CompareError>;
}

/// Opaque upstream speech-to-text collaborator. The comparator never retries
/// it; failures propagate unchanged as `CompareError::Transcription`.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &[u8], language: &LanguageTag) -> Result<String, CompareError>;
}
