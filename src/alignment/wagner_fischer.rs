use crate::types::{AlignmentOp, OpKind, PhonemeSequence};

/// Minimum-edit-distance alignment between two phoneme sequences.
///
/// Wagner-Fischer dynamic program with unit cost for substitution,
/// insertion, and deletion, and zero cost for exact token match.
/// O(n·m) time and space; fine for sentence-length sequences.
///
/// Tie-break during backtrack: diagonal moves (Match/Substitution) are
/// preferred over vertical/horizontal ones, and Deletion is taken before
/// Insertion, so identical inputs always produce identical output.
pub fn align_sequences(reference: &PhonemeSequence, hypothesis: &PhonemeSequence) -> Vec<AlignmentOp> {
    let ref_tokens = reference.tokens();
    let hyp_tokens = hypothesis.tokens();
    let n = ref_tokens.len();
    let m = hyp_tokens.len();

    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as u32;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j as u32;
    }

    for i in 1..=n {
        for j in 1..=m {
            let sub_cost = u32::from(ref_tokens[i - 1] != hyp_tokens[j - 1]);
            dp[i][j] = (dp[i - 1][j - 1] + sub_cost)
                .min(dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1);
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let sub_cost = u32::from(ref_tokens[i - 1] != hyp_tokens[j - 1]);
            if dp[i][j] == dp[i - 1][j - 1] + sub_cost {
                let op = if sub_cost == 0 {
                    OpKind::Match
                } else {
                    OpKind::Substitution
                };
                ops.push(AlignmentOp {
                    op,
                    reference_token: Some(ref_tokens[i - 1].clone()),
                    hypothesis_token: Some(hyp_tokens[j - 1].clone()),
                });
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && (j == 0 || dp[i][j] == dp[i - 1][j] + 1) {
            ops.push(AlignmentOp {
                op: OpKind::Deletion,
                reference_token: Some(ref_tokens[i - 1].clone()),
                hypothesis_token: None,
            });
            i -= 1;
        } else {
            ops.push(AlignmentOp {
                op: OpKind::Insertion,
                reference_token: None,
                hypothesis_token: Some(hyp_tokens[j - 1].clone()),
            });
            j -= 1;
        }
    }
    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(tokens: &[&str]) -> PhonemeSequence {
        PhonemeSequence::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    fn kinds(ops: &[AlignmentOp]) -> Vec<OpKind> {
        ops.iter().map(|op| op.op).collect()
    }

    /// Reference-side tokens (skipping Insertions) must rebuild the
    /// reference; hypothesis-side tokens (skipping Deletions) the hypothesis.
    fn assert_reconstructs(ops: &[AlignmentOp], reference: &PhonemeSequence, hypothesis: &PhonemeSequence) {
        let ref_side: Vec<String> = ops
            .iter()
            .filter_map(|op| op.reference_token.clone())
            .collect();
        let hyp_side: Vec<String> = ops
            .iter()
            .filter_map(|op| op.hypothesis_token.clone())
            .collect();
        assert_eq!(ref_side, reference.tokens());
        assert_eq!(hyp_side, hypothesis.tokens());
    }

    #[test]
    fn identical_sequences_are_all_matches() {
        let a = seq(&["h", "ə", "l", "oʊ"]);
        let ops = align_sequences(&a, &a);
        assert_eq!(kinds(&ops), vec![OpKind::Match; 4]);
        assert_reconstructs(&ops, &a, &a);
    }

    #[test]
    fn single_substitution_at_tail() {
        let reference = seq(&["h", "ə", "l", "oʊ"]);
        let hypothesis = seq(&["h", "ə", "l", "p"]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(
            kinds(&ops),
            vec![OpKind::Match, OpKind::Match, OpKind::Match, OpKind::Substitution]
        );
        assert_eq!(ops[3].reference_token.as_deref(), Some("oʊ"));
        assert_eq!(ops[3].hypothesis_token.as_deref(), Some("p"));
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn empty_hypothesis_yields_deletions() {
        let reference = seq(&["k", "æ", "t"]);
        let hypothesis = seq(&[]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(kinds(&ops), vec![OpKind::Deletion; 3]);
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn empty_reference_yields_insertions() {
        let reference = seq(&[]);
        let hypothesis = seq(&["d", "ɒ", "g"]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(kinds(&ops), vec![OpKind::Insertion; 3]);
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn both_empty_yields_empty_alignment() {
        let ops = align_sequences(&seq(&[]), &seq(&[]));
        assert!(ops.is_empty());
    }

    #[test]
    fn interior_deletion_keeps_surrounding_matches() {
        let reference = seq(&["a", "b", "c"]);
        let hypothesis = seq(&["a", "c"]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(kinds(&ops), vec![OpKind::Match, OpKind::Deletion, OpKind::Match]);
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn interior_insertion_keeps_surrounding_matches() {
        let reference = seq(&["a", "c"]);
        let hypothesis = seq(&["a", "b", "c"]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(kinds(&ops), vec![OpKind::Match, OpKind::Insertion, OpKind::Match]);
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn diagonal_preferred_when_costs_tie() {
        // "ab" -> "ba" costs 2 either as two substitutions or as
        // delete+match+insert; the diagonal preference pins the former.
        let reference = seq(&["a", "b"]);
        let hypothesis = seq(&["b", "a"]);
        let ops = align_sequences(&reference, &hypothesis);
        assert_eq!(kinds(&ops), vec![OpKind::Substitution, OpKind::Substitution]);
        assert_reconstructs(&ops, &reference, &hypothesis);
    }

    #[test]
    fn alignment_is_deterministic() {
        let reference = seq(&["s", "t", "r", "iː", "t"]);
        let hypothesis = seq(&["s", "t", "ɹ", "iː"]);
        let first = align_sequences(&reference, &hypothesis);
        let second = align_sequences(&reference, &hypothesis);
        assert_eq!(first, second);
    }
}
