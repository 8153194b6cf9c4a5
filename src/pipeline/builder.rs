use std::path::Path;

use crate::config::{load_lexicon, ComparatorConfig};
use crate::error::CompareError;
use crate::phonemize::EnglishRulePhonemizer;
use crate::pipeline::defaults::WagnerFischerAligner;
use crate::pipeline::runtime::{PhonemeComparator, PhonemeComparatorParts};
use crate::pipeline::traits::{Phonemizer, SequenceAligner};
use crate::types::LanguageTag;

pub struct PhonemeComparatorBuilder {
    config: ComparatorConfig,
    phonemizer: Option<Box<dyn Phonemizer>>,
    aligner: Option<Box<dyn SequenceAligner>>,
}

impl PhonemeComparatorBuilder {
    pub fn new(config: ComparatorConfig) -> Self {
        Self {
            config,
            phonemizer: None,
            aligner: None,
        }
    }

    pub fn with_phonemizer(mut self, phonemizer: Box<dyn Phonemizer>) -> Self {
        self.phonemizer = Some(phonemizer);
        self
    }

    pub fn with_aligner(mut self, aligner: Box<dyn SequenceAligner>) -> Self {
        self.aligner = Some(aligner);
        self
    }

    pub fn build(self) -> Result<PhonemeComparator, CompareError> {
        let language = LanguageTag::new(&self.config.language);

        let phonemizer: Box<dyn Phonemizer> = if let Some(phonemizer) = self.phonemizer {
            phonemizer
        } else {
            let lexicon = match self.config.lexicon_path.as_deref() {
                Some(path) => load_lexicon(Path::new(path))?,
                None => Default::default(),
            };
            Box::new(EnglishRulePhonemizer::with_lexicon(lexicon))
        };

        // Fail at build time rather than on the first comparison.
        if !phonemizer.supports(&language) {
            return Err(CompareError::unsupported_language(language.as_str()));
        }

        Ok(PhonemeComparator::from_parts(PhonemeComparatorParts {
            language,
            phonemizer,
            aligner: self.aligner.unwrap_or_else(|| Box::new(WagnerFischerAligner)),
        }))
    }
}
