//! Similarity grouping and merge-by-best-score.

use rf_core::RuleStats;
use std::collections::HashMap;

/// Rules sharing an attribute-name signature.
#[derive(Debug, Clone)]
pub struct SimilarityGroup {
    /// Sorted attribute names joined with `_`. Negation flags are not part
    /// of the signature: `age` and `NOT age` are similar.
    pub signature: String,
    /// Member rule indices, in ascending index order.
    pub members: Vec<usize>,
}

/// Signature of a rule: its predicates' attribute names, sorted and joined.
pub fn signature(stats: &RuleStats) -> String {
    let mut names: Vec<&str> = stats.predicates.iter().map(|p| p.attr.as_str()).collect();
    names.sort_unstable();
    names.join("_")
}

/// Bucket rule indices by signature, keeping only buckets of two or more.
///
/// Groups come out in first-appearance order of their signature, members in
/// rule-index order, so every downstream tie-break is deterministic.
pub fn group_similar(stats: &[RuleStats]) -> Vec<SimilarityGroup> {
    let mut by_signature: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<SimilarityGroup> = Vec::new();

    for (i, rule_stats) in stats.iter().enumerate() {
        let sig = signature(rule_stats);
        match by_signature.get(&sig) {
            Some(&slot) => groups[slot].members.push(i),
            None => {
                by_signature.insert(sig.clone(), groups.len());
                groups.push(SimilarityGroup {
                    signature: sig,
                    members: vec![i],
                });
            }
        }
    }

    groups.retain(|g| g.members.len() > 1);
    groups
}

/// Collapse a group to its best-scoring member's rule text.
///
/// Ties go to the earliest member — members are in rule-index order and
/// only a strictly greater score replaces the current best, so the lowest
/// original index wins. An empty group yields nothing.
pub fn merge_group<'a>(group: &SimilarityGroup, stats: &'a [RuleStats]) -> Option<&'a str> {
    let mut best: Option<usize> = None;
    for &i in &group.members {
        match best {
            Some(b) if stats[i].score <= stats[b].score => {}
            _ => best = Some(i),
        }
    }
    best.map(|i| stats[i].rule.as_str())
}
