//! Per-rule coverage statistics over the full dataset.

use crate::evaluate::eval_rule;
use rf_core::{Dataset, Result, RuleStats};
use rf_parser::parse_rule;

/// Compute statistics for every rule against the dataset.
///
/// Each rule is parsed once, then scanned over both label partitions.
/// O(rules × records × predicates) — the dominant cost of a compression
/// run. A malformed rule aborts the run with its parse error.
pub fn rule_stats(dataset: &Dataset, rules: &[String]) -> Result<Vec<RuleStats>> {
    let positive_count = dataset.positives().count();

    rules
        .iter()
        .map(|rule| {
            let predicates = parse_rule(rule)?;

            let tp = dataset
                .positives()
                .filter(|r| eval_rule(&predicates, r))
                .count();
            let fp = dataset
                .negatives()
                .filter(|r| eval_rule(&predicates, r))
                .count();

            let coverage = if positive_count > 0 {
                tp as f64 / positive_count as f64
            } else {
                0.0
            };
            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                0.0
            };

            Ok(RuleStats {
                rule: rule.clone(),
                predicates,
                tp,
                fp,
                coverage,
                precision,
                score: coverage * precision,
            })
        })
        .collect()
}
