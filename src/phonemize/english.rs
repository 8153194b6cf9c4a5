use std::collections::HashMap;

use crate::error::CompareError;
use crate::pipeline::traits::Phonemizer;
use crate::types::{LanguageTag, PhonemeSequence};

const SUPPORTED_TAGS: [&str; 2] = ["en", "en-us"];

/// Ordered grapheme -> IPA rules. Longer patterns come first so the longest
/// match wins at each position.
const RULES: &[(&str, &[&str])] = &[
    ("tch", &["tʃ"]),
    ("igh", &["aɪ"]),
    ("ch", &["tʃ"]),
    ("sh", &["ʃ"]),
    ("th", &["θ"]),
    ("ph", &["f"]),
    ("wh", &["w"]),
    ("ck", &["k"]),
    ("ng", &["ŋ"]),
    ("qu", &["k", "w"]),
    ("ee", &["iː"]),
    ("ea", &["iː"]),
    ("oo", &["uː"]),
    ("ou", &["aʊ"]),
    ("ow", &["aʊ"]),
    ("oi", &["ɔɪ"]),
    ("oy", &["ɔɪ"]),
    ("ai", &["eɪ"]),
    ("ay", &["eɪ"]),
    ("au", &["ɔː"]),
    ("aw", &["ɔː"]),
    ("ar", &["ɑː"]),
    ("or", &["ɔː"]),
    ("er", &["ə"]),
    ("a", &["æ"]),
    ("b", &["b"]),
    ("c", &["k"]),
    ("d", &["d"]),
    ("e", &["ɛ"]),
    ("f", &["f"]),
    ("g", &["ɡ"]),
    ("h", &["h"]),
    ("i", &["ɪ"]),
    ("j", &["dʒ"]),
    ("k", &["k"]),
    ("l", &["l"]),
    ("m", &["m"]),
    ("n", &["n"]),
    ("o", &["ɒ"]),
    ("p", &["p"]),
    ("q", &["k"]),
    ("r", &["ɹ"]),
    ("s", &["s"]),
    ("t", &["t"]),
    ("u", &["ʌ"]),
    ("v", &["v"]),
    ("w", &["w"]),
    ("x", &["k", "s"]),
    ("y", &["j"]),
    ("z", &["z"]),
];

/// Irregular words the letter-to-sound rules get wrong.
fn builtin_lexicon(word: &str) -> Option<&'static [&'static str]> {
    let entry: &'static [&'static str] = match word {
        "a" => &["ə"],
        "the" => &["ð", "ə"],
        "of" => &["ə", "v"],
        "to" => &["t", "ə"],
        "one" => &["w", "ʌ", "n"],
        "two" => &["t", "uː"],
        "you" => &["j", "uː"],
        "said" => &["s", "ɛ", "d"],
        "hello" => &["h", "ə", "l", "oʊ"],
        "world" => &["w", "ɜː", "l", "d"],
        _ => return None,
    };
    Some(entry)
}

/// Rule-based English grapheme-to-phoneme backend.
///
/// Lookup order per word: configured lexicon, built-in exception lexicon,
/// then ordered longest-match letter-to-sound rules. Output is deterministic
/// for identical inputs.
#[derive(Debug, Default)]
pub struct EnglishRulePhonemizer {
    lexicon: HashMap<String, Vec<String>>,
}

impl EnglishRulePhonemizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: HashMap<String, Vec<String>>) -> Self {
        Self { lexicon }
    }
}

impl Phonemizer for EnglishRulePhonemizer {
    fn supports(&self, language: &LanguageTag) -> bool {
        SUPPORTED_TAGS.contains(&language.as_str())
    }

    fn phonemize(
        &self,
        text: &str,
        language: &LanguageTag,
    ) -> Result<PhonemeSequence, CompareError> {
        if !self.supports(language) {
            return Err(CompareError::unsupported_language(language.as_str()));
        }

        let mut tokens = Vec::new();
        let mut saw_word = false;
        for word in text.to_lowercase().split_whitespace() {
            let normalized: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
            if normalized.is_empty() {
                continue;
            }
            saw_word = true;

            if let Some(entry) = self.lexicon.get(&normalized) {
                tokens.extend(entry.iter().cloned());
            } else if let Some(entry) = builtin_lexicon(&normalized) {
                tokens.extend(entry.iter().map(|p| p.to_string()));
            } else {
                apply_rules(&normalized, &mut tokens);
            }
        }

        if !saw_word {
            return Err(CompareError::tokenization("empty input after normalization"));
        }

        Ok(PhonemeSequence::from_tokens(tokens))
    }
}

fn apply_rules(word: &str, out: &mut Vec<String>) {
    let mut rest = word;
    while !rest.is_empty() {
        let mut matched = false;
        for (pattern, phonemes) in RULES {
            if rest.starts_with(pattern) {
                out.extend(phonemes.iter().map(|p| p.to_string()));
                rest = &rest[pattern.len()..];
                matched = true;
                break;
            }
        }
        if !matched {
            // Normalization only passes ASCII letters, all of which have a
            // single-letter rule, so this branch is unreachable in practice.
            let skip = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            rest = &rest[skip..];
        }
    }
}
