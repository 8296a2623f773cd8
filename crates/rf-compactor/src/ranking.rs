//! Complexity-adjusted ranking of surviving rules.

use rf_core::{Result, RuleStats};
use rf_parser::parse_rule;

/// Sort kept rule texts descending by `score / sqrt(predicate_count)`.
///
/// Each text is re-parsed for its predicate count and looks its score up in
/// the statistics table by exact text match (first match wins on duplicate
/// texts; a text with no entry scores 0). A zero-predicate rule is pinned
/// to adjusted score 0. The sort is stable: equal scores keep the order the
/// rules were appended in.
pub fn rank(kept: Vec<String>, stats: &[RuleStats]) -> Result<Vec<String>> {
    let mut scored: Vec<(String, f64)> = Vec::with_capacity(kept.len());

    for rule in kept {
        let complexity = parse_rule(&rule)?.len();
        let score = stats
            .iter()
            .find(|s| s.rule == rule)
            .map(|s| s.score)
            .unwrap_or(0.0);
        let adjusted = if complexity == 0 {
            0.0
        } else {
            score / (complexity as f64).sqrt()
        };
        scored.push((rule, adjusted));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(scored.into_iter().map(|(rule, _)| rule).collect())
}
