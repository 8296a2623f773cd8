//! rulefold compression core — reduces a redundant rule set to a ranked one.
//!
//! Stages:
//! 1. Coverage — tp/fp/coverage/precision/score per rule over the dataset
//! 2. Redundancy — drop rules dominated by a simpler rule
//! 3. Grouping — bucket rules sharing an attribute-name signature
//! 4. Merge — keep the best-scoring member of each bucket
//! 5. Ranking — sort survivors by score / sqrt(predicate count)

pub mod coverage;
pub mod evaluate;
pub mod grouping;
pub mod pipeline;
pub mod ranking;
pub mod redundancy;

pub use pipeline::{compress, CompressionResult};
