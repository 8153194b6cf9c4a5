use crate::types::{AlignmentOp, ComparisonResult, OpKind};

/// Unit-cost edit distance implied by an alignment: the count of non-Match ops.
pub fn edit_distance(ops: &[AlignmentOp]) -> u32 {
    ops.iter().filter(|op| op.op != OpKind::Match).count() as u32
}

/// Normalized similarity: `1 - edit_distance / max(ref_len, hyp_len)`,
/// clamped to [0, 1].
///
/// Both sequences empty is a vacuous full match and scores 1.0. The score is
/// 1.0 iff every op is a Match.
pub fn score(ops: &[AlignmentOp]) -> f32 {
    let ref_len = ops
        .iter()
        .filter(|op| op.op != OpKind::Insertion)
        .count();
    let hyp_len = ops
        .iter()
        .filter(|op| op.op != OpKind::Deletion)
        .count();
    let denom = ref_len.max(hyp_len);
    if denom == 0 {
        return 1.0;
    }
    (1.0 - edit_distance(ops) as f32 / denom as f32).clamp(0.0, 1.0)
}

/// Bundle an op sequence into a `ComparisonResult`.
pub fn summarize(ops: Vec<AlignmentOp>) -> ComparisonResult {
    let edit_distance = edit_distance(&ops);
    let score = score(&ops);
    ComparisonResult {
        ops,
        edit_distance,
        score,
    }
}
