use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Chart is missing its '{0}' encoding channel")]
    MissingChannel(&'static str),
}
