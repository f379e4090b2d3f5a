//! Caller-facing errors for account and gallery flows
//!
//! Validation failures carry the human-readable message a form shows inline.
//! Lookups that find nothing are not errors; they surface as `None`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// A signup field was left blank
    #[error("All fields are required")]
    MissingFields,

    /// Signup with an email that is already registered
    #[error("User with this email already exists")]
    EmailTaken,

    /// Login with an email no user has
    #[error("Invalid email or user not found. (Try creating an account)")]
    InvalidCredentials,

    /// Upload without an image, a title or a description
    #[error("An image, a title and a description are required")]
    IncompleteUpload,

    /// Upload attempted without a logged-in user
    #[error("You must be logged in to do that")]
    NotAuthenticated,

    /// The backend failed (storage, transport)
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ShowcaseError {
    /// Whether this error is a form validation failure rather than a backend fault
    pub fn is_validation(&self) -> bool {
        !matches!(self, ShowcaseError::Backend(_))
    }
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShowcaseError::MissingFields.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ShowcaseError::EmailTaken.to_string(),
            "User with this email already exists"
        );
        assert!(ShowcaseError::InvalidCredentials
            .to_string()
            .contains("Try creating an account"));
    }

    #[test]
    fn test_backend_errors_pass_through() {
        let err = ShowcaseError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.to_string(), "disk on fire");
        assert!(!err.is_validation());
        assert!(ShowcaseError::EmailTaken.is_validation());
    }
}
