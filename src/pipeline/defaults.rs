use crate::alignment::wagner_fischer::align_sequences;
use crate::error::CompareError;
use crate::pipeline::traits::SequenceAligner;
use crate::types::{AlignmentOp, PhonemeSequence};

pub struct WagnerFischerAligner;

impl SequenceAligner for WagnerFischerAligner {
    fn align(
        &self,
        reference: &PhonemeSequence,
        hypothesis: &PhonemeSequence,
    ) -> Result<Vec<AlignmentOp>, CompareError> {
        Ok(align_sequences(reference, hypothesis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_aligner_matches_free_function() {
        let reference =
            PhonemeSequence::from_tokens(vec!["k".into(), "æ".into(), "t".into()]);
        let hypothesis = PhonemeSequence::from_tokens(vec!["k".into(), "ɒ".into(), "t".into()]);
        let aligner = WagnerFischerAligner;
        let ops = aligner.align(&reference, &hypothesis).unwrap();
        let expected = align_sequences(&reference, &hypothesis);
        assert_eq!(ops, expected);
    }
}
