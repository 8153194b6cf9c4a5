use std::collections::HashMap;
use std::path::Path;

use crate::error::CompareError;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ComparatorConfig {
    /// Language tag used when phonemizing both texts, e.g. "en-us".
    #[serde(default = "default_language")]
    pub language: String,
    /// Optional JSON lexicon (word -> phoneme tokens) layered over the
    /// built-in exception lexicon of the default phonemizer.
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

impl ComparatorConfig {
    pub const DEFAULT_LANGUAGE: &'static str = "en-us";
}

fn default_language() -> String {
    ComparatorConfig::DEFAULT_LANGUAGE.to_string()
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            lexicon_path: None,
        }
    }
}

/// Load a word -> phoneme-tokens lexicon from a JSON object file.
///
/// Keys are lowercased so lookup matches the phonemizer's normalization.
pub(crate) fn load_lexicon(path: &Path) -> Result<HashMap<String, Vec<String>>, CompareError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| CompareError::io("read lexicon file", e))?;
    let raw: HashMap<String, Vec<String>> =
        serde_json::from_str(&data).map_err(|e| CompareError::json("parse lexicon file", e))?;

    Ok(raw
        .into_iter()
        .map(|(word, phonemes)| (word.to_ascii_lowercase(), phonemes))
        .collect())
}
