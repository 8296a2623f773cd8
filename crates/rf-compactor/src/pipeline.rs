//! Compression pipeline — orchestrates all stages.

use crate::{coverage, grouping, ranking, redundancy};
use rf_core::{Dataset, Result};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Compression result with run statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// Surviving rule texts, descending by adjusted score.
    pub rules: Vec<String>,
    pub original_count: usize,
    pub compressed_count: usize,
    /// Rules dropped as dominated.
    pub redundant_count: usize,
    /// Similarity groups that were merged.
    pub group_count: usize,
    pub reduction_pct: f64,
}

impl CompressionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 1.0;
        }
        self.compressed_count as f64 / self.original_count as f64
    }
}

/// Compress a rule set against a labeled dataset.
///
/// 1. Statistics for every rule.
/// 2. Redundant-index set and similarity groups.
/// 3. One merged rule per group.
/// 4. Every group member is consumed by its group, merged or not.
/// 5. Rules neither redundant nor grouped survive on their own.
/// 6. Survivors ranked by complexity-adjusted score, stable on ties.
pub fn compress(dataset: &Dataset, rules: &[String]) -> Result<CompressionResult> {
    info!(rules = rules.len(), records = dataset.len(), "compressing rule set");

    let stats = coverage::rule_stats(dataset, rules)?;
    let redundant = redundancy::find_redundant(&stats);
    let groups = grouping::group_similar(&stats);

    let mut kept: Vec<String> = Vec::new();
    for group in &groups {
        if let Some(rule) = grouping::merge_group(group, &stats) {
            kept.push(rule.to_string());
        }
    }

    let used: HashSet<usize> = groups.iter().flat_map(|g| g.members.iter().copied()).collect();
    for (i, rule_stats) in stats.iter().enumerate() {
        if !redundant.contains(&i) && !used.contains(&i) {
            kept.push(rule_stats.rule.clone());
        }
    }

    debug!(
        redundant = redundant.len(),
        groups = groups.len(),
        kept = kept.len(),
        "pruned rule set"
    );

    let ranked = ranking::rank(kept, &stats)?;

    let reduction_pct = if rules.is_empty() {
        0.0
    } else {
        (rules.len() - ranked.len()) as f64 / rules.len() as f64 * 100.0
    };

    Ok(CompressionResult {
        original_count: rules.len(),
        compressed_count: ranked.len(),
        redundant_count: redundant.len(),
        group_count: groups.len(),
        reduction_pct,
        rules: ranked,
    })
}
