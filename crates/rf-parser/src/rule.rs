//! Rule text parsing.
//!
//! A rule line reads `<LHS> => <RHS>`: the left-hand side is a conjunction
//! of ` AND `-separated terms, each optionally prefixed with `NOT `; the
//! right-hand side is opaque and carried through verbatim as part of the
//! rule text.

use anyhow::{Context, Result};
use rf_core::{Predicate, RfError};
use std::path::Path;
use tracing::debug;

/// Separator between a rule's antecedent and its consequent.
pub const SEPARATOR: &str = " => ";
/// Conjunction token between predicates.
pub const CONJUNCTION: &str = " AND ";
/// Prefix marking a negated predicate.
pub const NEGATION_PREFIX: &str = "NOT ";

/// Parse a rule's left-hand side into its ordered predicates.
///
/// Only the text before the first `" => "` is parsed; the consequent is
/// discarded here. A line without the separator is a syntax error rather
/// than a single-term rule. Attribute names are not validated — unknown
/// or empty names evaluate as undefined later, they are not rejected.
pub fn parse_rule(rule: &str) -> rf_core::Result<Vec<Predicate>> {
    let (lhs, _rhs) = rule.split_once(SEPARATOR).ok_or_else(|| RfError::RuleSyntax {
        line: rule.to_string(),
    })?;

    Ok(lhs
        .split(CONJUNCTION)
        .map(|term| {
            let term = term.trim();
            match term.strip_prefix(NEGATION_PREFIX) {
                Some(attr) => Predicate::new(true, attr),
                None => Predicate::new(false, term),
            }
        })
        .collect())
}

/// Split rule-file content into trimmed, non-empty rule lines.
pub fn parse_rule_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a rule file: one rule per non-empty line, order preserved.
pub fn load_rules(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading rule file {}", path.display()))?;
    let rules = parse_rule_lines(&content);
    debug!(count = rules.len(), "loaded rules");
    Ok(rules)
}
