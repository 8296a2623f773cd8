use thiserror::Error;

#[derive(Error, Debug)]
pub enum RfError {
    #[error("Rule has no ' => ' separator: {line}")]
    RuleSyntax { line: String },
    #[error("Label column not found: {name}")]
    MissingColumn { name: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RfError>;
