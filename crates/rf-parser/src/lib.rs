//! Input parsing for rulefold: rule text → predicates, TSV text → dataset.

pub mod rule;
pub mod table;

pub use rule::{load_rules, parse_rule, parse_rule_lines};
pub use table::{load_table, parse_table};
