use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DeriveError {
    /// A caller-supplied field is outside the domain the formulas accept.
    InvalidInput { field: &'static str, reason: String },
}

impl DeriveError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DeriveError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            DeriveError::InvalidInput { field, .. } => field,
        }
    }
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeriveError::InvalidInput { field, reason } => {
                write!(f, "invalid input for {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for DeriveError {}

pub type Result<T> = std::result::Result<T, DeriveError>;
