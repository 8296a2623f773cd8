//! Predicate and rule evaluation against single records.

use rf_core::{Predicate, Record};

/// Evaluate one predicate against one record.
///
/// Returns `None` when the attribute is absent or its value is missing —
/// the undefined outcome, distinct from true/false. Otherwise the result
/// is the value's truthiness, inverted for a negated predicate.
pub fn eval_predicate(predicate: &Predicate, record: &Record) -> Option<bool> {
    let base = record.get(&predicate.attr)?.truthiness()?;
    Some(if predicate.negated { !base } else { base })
}

/// Evaluate a full rule (conjunction of predicates) against one record.
///
/// Undefined outcomes are discarded; the rule is the AND of the defined
/// ones. With no defined outcome at all (every predicate undefined, or
/// zero predicates) the rule is false — missing data never makes a rule
/// vacuously true.
pub fn eval_rule(predicates: &[Predicate], record: &Record) -> bool {
    let mut any_defined = false;
    for predicate in predicates {
        match eval_predicate(predicate, record) {
            Some(false) => return false,
            Some(true) => any_defined = true,
            None => {}
        }
    }
    any_defined
}
