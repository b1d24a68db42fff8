//! Input validation for the interactive prompts.
//!
//! Every check is a pure function of the raw line, so the prompt loop only
//! has to read, call [`validate`], and re-ask on error.

use super::error::ValidationError;
use super::spec::RestartPolicy;

/// A prompted field of [`super::spec::ServiceSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    ExecPath,
    WorkingDir,
    RestartPolicy,
}

/// An accepted field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Restart(RestartPolicy),
}

/// Validate a raw input line for `field`. Surrounding whitespace is ignored.
pub fn validate(field: Field, raw: &str) -> Result<FieldValue, ValidationError> {
    let input = raw.trim();
    match field {
        Field::Name => validate_name(input).map(|n| FieldValue::Text(n.to_string())),
        Field::ExecPath => validate_exec_path(input).map(|e| FieldValue::Text(e.to_string())),
        Field::Description | Field::WorkingDir => Ok(FieldValue::Text(input.to_string())),
        Field::RestartPolicy => RestartPolicy::from_choice(input)
            .map(FieldValue::Restart)
            .ok_or_else(|| ValidationError::InvalidRestartChoice(input.to_string())),
    }
}

/// Allowed in unit names: ASCII letters, digits, `-`, `@`, `_`
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '@' | '_')
}

pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    match name.chars().find(|c| !is_name_char(*c)) {
        Some(bad) => Err(ValidationError::InvalidNameChar(bad)),
        None => Ok(name),
    }
}

pub fn validate_exec_path(exec_path: &str) -> Result<&str, ValidationError> {
    if exec_path.trim().is_empty() {
        return Err(ValidationError::EmptyCommand);
    }
    Ok(exec_path)
}
