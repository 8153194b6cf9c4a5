use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use phoneme_compare_rs::{
    build_report, ComparatorConfig, ComparisonReport, OpKind, PhonemeComparatorBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Compare a reference sentence against a (typically transcribed) hypothesis
/// at the phoneme level and report pronunciation discrepancies.
#[derive(Debug, Parser)]
#[command(name = "pronunciation-report")]
struct Args {
    /// Reference text the speaker was asked to say.
    #[arg(long)]
    reference: String,
    /// Hypothesis text, e.g. the transcription of the speaker's attempt.
    #[arg(long)]
    hypothesis: String,
    /// Language tag used for phonemization.
    #[arg(long, default_value = "en-us")]
    language: String,
    /// Optional JSON lexicon (word -> phoneme tokens) layered over the
    /// built-in exceptions.
    #[arg(long)]
    lexicon: Option<String>,
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = ComparatorConfig {
        language: args.language,
        lexicon_path: args.lexicon,
    };
    let comparator = PhonemeComparatorBuilder::new(config).build()?;
    let result = comparator.compare_texts(&args.reference, &args.hypothesis)?;
    let report = build_report(&result);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &ComparisonReport) {
    println!(
        "score: {:.3}  edit distance: {}  (ref {} / hyp {} tokens)",
        report.score, report.edit_distance, report.reference_len, report.hypothesis_len
    );
    println!(
        "matches: {}  substitutions: {}  insertions: {}  deletions: {}",
        report.counts.matches,
        report.counts.substitutions,
        report.counts.insertions,
        report.counts.deletions
    );

    for (index, op) in report.ops.iter().enumerate() {
        let marker = match op.op {
            OpKind::Match => ' ',
            OpKind::Substitution => 'S',
            OpKind::Insertion => 'I',
            OpKind::Deletion => 'D',
        };
        println!(
            "{index:>3} {marker} {:>4} -> {}",
            op.reference_token.as_deref().unwrap_or("-"),
            op.hypothesis_token.as_deref().unwrap_or("-")
        );
    }
}
