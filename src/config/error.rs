use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("service name must not be empty")]
    EmptyName,
    #[error("service name contains invalid character '{0}'")]
    InvalidNameChar(char),
    #[error("command must not be empty")]
    EmptyCommand,
    #[error("invalid restart policy choice '{0}'")]
    InvalidRestartChoice(String),
}
