use serde::Serialize;

use crate::types::{AlignmentOp, ComparisonResult, OpKind};

/// Serializable pronunciation-feedback view of a `ComparisonResult`,
/// suitable for a JSON response body.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub score: f32,
    pub edit_distance: u32,
    pub reference_len: u32,
    pub hypothesis_len: u32,
    pub counts: OpCounts,
    pub ops: Vec<AlignmentOp>,
    pub discrepancies: Vec<Discrepancy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpCounts {
    pub matches: u32,
    pub substitutions: u32,
    pub insertions: u32,
    pub deletions: u32,
}

/// A non-Match op with its position in the alignment, for display to the
/// practicing user.
#[derive(Debug, Clone, Serialize)]
pub struct Discrepancy {
    pub position: u32,
    pub op: OpKind,
    pub expected: Option<String>,
    pub heard: Option<String>,
}

pub fn build_report(result: &ComparisonResult) -> ComparisonReport {
    let mut counts = OpCounts::default();
    let mut discrepancies = Vec::new();

    for (position, op) in result.ops.iter().enumerate() {
        match op.op {
            OpKind::Match => counts.matches += 1,
            OpKind::Substitution => counts.substitutions += 1,
            OpKind::Insertion => counts.insertions += 1,
            OpKind::Deletion => counts.deletions += 1,
        }
        if op.op != OpKind::Match {
            discrepancies.push(Discrepancy {
                position: position as u32,
                op: op.op,
                expected: op.reference_token.clone(),
                heard: op.hypothesis_token.clone(),
            });
        }
    }

    let reference_len = counts.matches + counts.substitutions + counts.deletions;
    let hypothesis_len = counts.matches + counts.substitutions + counts.insertions;

    ComparisonReport {
        score: result.score,
        edit_distance: result.edit_distance,
        reference_len,
        hypothesis_len,
        counts,
        ops: result.ops.clone(),
        discrepancies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::score::summarize;
    use crate::alignment::wagner_fischer::align_sequences;
    use crate::types::PhonemeSequence;

    fn seq(tokens: &[&str]) -> PhonemeSequence {
        PhonemeSequence::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn report_counts_and_discrepancies() {
        let reference = seq(&["h", "ə", "l", "oʊ"]);
        let hypothesis = seq(&["h", "ə", "l", "p"]);
        let result = summarize(align_sequences(&reference, &hypothesis));
        let report = build_report(&result);

        assert_eq!(
            report.counts,
            OpCounts {
                matches: 3,
                substitutions: 1,
                insertions: 0,
                deletions: 0,
            }
        );
        assert_eq!(report.reference_len, 4);
        assert_eq!(report.hypothesis_len, 4);
        assert_eq!(report.discrepancies.len(), 1);
        assert_eq!(report.discrepancies[0].position, 3);
        assert_eq!(report.discrepancies[0].expected.as_deref(), Some("oʊ"));
        assert_eq!(report.discrepancies[0].heard.as_deref(), Some("p"));
    }

    #[test]
    fn perfect_match_has_no_discrepancies() {
        let a = seq(&["k", "æ", "t"]);
        let result = summarize(align_sequences(&a, &a));
        let report = build_report(&result);
        assert!(report.discrepancies.is_empty());
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn report_serializes_to_expected_json_shape() {
        let reference = seq(&["k", "æ", "t"]);
        let hypothesis = seq(&["k", "æ"]);
        let result = summarize(align_sequences(&reference, &hypothesis));
        let report = build_report(&result);

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["edit_distance"], 1);
        assert_eq!(json["counts"]["deletions"], 1);
        assert_eq!(json["ops"][0]["op"], "Match");
        assert_eq!(json["ops"][2]["hypothesis_token"], serde_json::Value::Null);
    }
}
