//! View state error types
//!
//! Malformed URL state is never an error for the dashboard itself: it is
//! normalized to the defaults. These types only surface through the typed
//! parsing API and through a history backend refusing a push.

use thiserror::Error;

/// A string that is not one of the supported locale identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale '{0}', expected 'it' or 'en'")]
pub struct ParseLocaleError(pub String);

/// A string that is not one of the four tab identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tab '{0}', expected one of overview, studies, experience, future")]
pub struct ParseTabError(pub String);

/// Errors reported by a `History` backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The environment has no history object (e.g. no window)
    #[error("History is unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the new entry (e.g. cross-origin URL)
    #[error("History entry rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseLocaleError("fr".to_string());
        assert_eq!(err.to_string(), "Unknown locale 'fr', expected 'it' or 'en'");

        let err = NavigationError::Rejected("SecurityError".to_string());
        assert_eq!(err.to_string(), "History entry rejected: SecurityError");
    }
}
