use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open dataset '{}': {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Line {line}: cannot parse {column} value {value:?}")]
    Parse {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl DatasetError {
    /// Whether the error comes from the file's content rather than from reaching the file.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, DatasetError::Resource { .. })
    }
}
