use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized BCP-47-style language tag, e.g. `en-us`.
///
/// Tags are trimmed and ASCII-lowercased on construction so backend lookup
/// and equality are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of phoneme tokens derived from one input text.
///
/// Immutable once produced: token storage is private and only exposed
/// through read accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhonemeSequence {
    tokens: Vec<String>,
}

impl PhonemeSequence {
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Match,
    Substitution,
    Insertion,
    Deletion,
}

/// One step of an alignment between a reference and a hypothesis sequence.
///
/// `reference_token` is `None` for Insertions; `hypothesis_token` is `None`
/// for Deletions. Every other op carries both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentOp {
    pub op: OpKind,
    pub reference_token: Option<String>,
    pub hypothesis_token: Option<String>,
}

/// Result of comparing two phoneme sequences.
///
/// `edit_distance` counts non-Match ops at unit cost; `score` is
/// `1 - edit_distance / max(ref_len, hyp_len)` clamped to [0, 1], with the
/// both-empty case pinned to 1.0 (vacuous full match).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub ops: Vec<AlignmentOp>,
    pub edit_distance: u32,
    pub score: f32,
}
