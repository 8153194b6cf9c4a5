pub mod alignment;
pub mod config;
pub mod error;
pub mod phonemize;
pub mod pipeline;
pub mod types;

pub use alignment::report::{build_report, ComparisonReport, Discrepancy, OpCounts};
pub use config::ComparatorConfig;
pub use error::CompareError;
pub use pipeline::builder::PhonemeComparatorBuilder;
pub use pipeline::runtime::PhonemeComparator;
pub use pipeline::traits::{Phonemizer, SequenceAligner, Transcriber};
pub use types::{AlignmentOp, ComparisonResult, LanguageTag, OpKind, PhonemeSequence};
