//! Dominance-based redundancy detection.

use rf_core::RuleStats;
use std::collections::HashSet;

/// Indices of rules dominated by some other rule.
///
/// Rule `i` is redundant when a rule `j` exists with coverage and precision
/// at least as good while using strictly fewer predicates. One witness
/// suffices; the result is a plain set, so candidate scan order cannot
/// affect it. No transitive chaining — a rule is only flagged against a
/// direct witness.
pub fn find_redundant(stats: &[RuleStats]) -> HashSet<usize> {
    let mut redundant = HashSet::new();

    for (i, rule_i) in stats.iter().enumerate() {
        for (j, rule_j) in stats.iter().enumerate() {
            if i == j {
                continue;
            }
            if rule_i.coverage <= rule_j.coverage
                && rule_i.precision <= rule_j.precision
                && rule_i.predicates.len() > rule_j.predicates.len()
            {
                redundant.insert(i);
                break;
            }
        }
    }

    redundant
}
