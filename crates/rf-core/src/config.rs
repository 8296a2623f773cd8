use serde::{Deserialize, Serialize};

/// Default label column marking the positive class.
pub const DEFAULT_LABEL_COLUMN: &str = "donor_is_old";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Boolean-valued dataset column that splits records into the
    /// positive and negative class.
    pub label_column: String,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            label_column: DEFAULT_LABEL_COLUMN.into(),
        }
    }
}
