use crate::alignment::score::summarize;
use crate::error::CompareError;
use crate::pipeline::traits::{Phonemizer, SequenceAligner, Transcriber};
use crate::types::{ComparisonResult, LanguageTag, PhonemeSequence};

/// Length ratio beyond which the two inputs are probably not the same
/// utterance; we still compare but log a warning.
const LENGTH_DISPARITY_WARN_FACTOR: usize = 4;

/// Stateless comparison pipeline: text -> phonemes -> alignment -> score.
///
/// Holds no mutable state between invocations; separate comparisons may run
/// concurrently from multiple threads.
pub struct PhonemeComparator {
    language: LanguageTag,
    phonemizer: Box<dyn Phonemizer>,
    aligner: Box<dyn SequenceAligner>,
}

pub(crate) struct PhonemeComparatorParts {
    pub language: LanguageTag,
    pub phonemizer: Box<dyn Phonemizer>,
    pub aligner: Box<dyn SequenceAligner>,
}

impl PhonemeComparator {
    pub(crate) fn from_parts(parts: PhonemeComparatorParts) -> Self {
        Self {
            language: parts.language,
            phonemizer: parts.phonemizer,
            aligner: parts.aligner,
        }
    }

    pub fn language(&self) -> &LanguageTag {
        &self.language
    }

    /// Convert one text to a phoneme sequence using the configured backend.
    pub fn phonemize(&self, text: &str) -> Result<PhonemeSequence, CompareError> {
        self.phonemizer.phonemize(text, &self.language)
    }

    /// Compare a reference text against a hypothesis text.
    ///
    /// Atomic: any tokenization failure on either side short-circuits and
    /// yields no partial result.
    pub fn compare_texts(
        &self,
        reference: &str,
        hypothesis: &str,
    ) -> Result<ComparisonResult, CompareError> {
        let reference_seq = self.phonemize(reference)?;
        let hypothesis_seq = self.phonemize(hypothesis)?;

        tracing::debug!(
            language = %self.language,
            reference_tokens = reference_seq.len(),
            hypothesis_tokens = hypothesis_seq.len(),
            "aligning phoneme sequences"
        );

        let longer = reference_seq.len().max(hypothesis_seq.len());
        let shorter = reference_seq.len().min(hypothesis_seq.len());
        if shorter > 0 && longer / shorter >= LENGTH_DISPARITY_WARN_FACTOR {
            tracing::warn!(
                reference_tokens = reference_seq.len(),
                hypothesis_tokens = hypothesis_seq.len(),
                "large length disparity between reference and hypothesis"
            );
        }

        let ops = self.aligner.align(&reference_seq, &hypothesis_seq)?;
        Ok(summarize(ops))
    }

    /// Compare a reference text against the transcription of an audio clip.
    ///
    /// The transcriber is an opaque upstream collaborator; its failure
    /// propagates unchanged and no comparison is attempted.
    pub fn compare_transcribed(
        &self,
        reference: &str,
        audio: &[u8],
        transcriber: &dyn Transcriber,
    ) -> Result<ComparisonResult, CompareError> {
        if audio.is_empty() {
            return Err(CompareError::invalid_input("empty audio payload"));
        }
        let hypothesis = transcriber.transcribe(audio, &self.language)?;
        tracing::debug!(hypothesis_chars = hypothesis.len(), "received transcription");
        self.compare_texts(reference, &hypothesis)
    }
}
