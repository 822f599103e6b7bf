use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected seven-seven or sixteen)")]
pub struct ParseStrategyError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("{flag} requires a number, got '{value}'")]
    InvalidNumber { flag: &'static str, value: String },

    #[error(transparent)]
    InvalidStrategy(#[from] ParseStrategyError),

    #[error("--cap must be at least 1")]
    ZeroCap,
}
