//! UI Errors
//!
//! Every failure the page can show. The display text is the exact banner
//! message; nothing else about the cause reaches the user.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UiError {
    /// List could not be read or decoded
    #[error("Failed to load items")]
    Load,
    /// Form submitted without a name
    #[error("Name is required")]
    Validation,
    /// Create or update failed
    #[error("Operation failed")]
    Operation,
    /// Delete failed
    #[error("Failed to delete item")]
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(UiError::Load.to_string(), "Failed to load items");
        assert_eq!(UiError::Validation.to_string(), "Name is required");
        assert_eq!(UiError::Operation.to_string(), "Operation failed");
        assert_eq!(UiError::Delete.to_string(), "Failed to delete item");
    }
}
