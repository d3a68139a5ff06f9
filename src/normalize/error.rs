//! Normalization error types

/// Errors raised while reshaping an already-parsed tree
///
/// Malformed source text never reaches this crate; the external parser
/// rejects it first. These errors cover trees whose structure cannot be
/// reshaped into a canonical document (wrong root type, a field of an
/// impossible shape). Normalization is all-or-nothing: a failed reshape
/// produces no partial document.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Failed to reshape request tree: {reason}{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    RequestShape { reason: String, hint: Option<String> },

    #[error("Failed to reshape environment tree: {reason}{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    EnvironmentShape { reason: String, hint: Option<String> },
}

impl NormalizeError {
    pub(crate) fn request_shape(reason: impl ToString) -> Self {
        NormalizeError::RequestShape {
            reason: reason.to_string(),
            hint: None,
        }
    }

    pub(crate) fn environment_shape(reason: impl ToString) -> Self {
        NormalizeError::EnvironmentShape {
            reason: reason.to_string(),
            hint: None,
        }
    }

    /// Attach an actionable hint to the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint_val = Some(hint.into());
        match self {
            NormalizeError::RequestShape { ref mut hint, .. } => *hint = hint_val,
            NormalizeError::EnvironmentShape { ref mut hint, .. } => *hint = hint_val,
        }
        self
    }
}
