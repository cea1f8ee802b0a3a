//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by the activity directory.
///
/// The display strings are the `detail` messages sent back to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No activity exists with the requested name.
    #[error("Activity not found")]
    NotFound { activity: String },
    /// The email is already on the activity's roster.
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp { activity: String, email: String },
    /// The email is not on the activity's roster.
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

impl DirectoryError {
    pub fn activity(&self) -> &str {
        match self {
            Self::NotFound { activity }
            | Self::AlreadySignedUp { activity, .. }
            | Self::NotSignedUp { activity, .. } => activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_messages() {
        let not_found = DirectoryError::NotFound {
            activity: "Chess Club".into(),
        };
        assert!(not_found.to_string().contains("not found"));

        let duplicate = DirectoryError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert!(duplicate.to_string().contains("already signed up"));

        let absent = DirectoryError::NotSignedUp {
            activity: "Chess Club".into(),
            email: "a@mergington.edu".into(),
        };
        assert!(absent.to_string().contains("not signed up"));
        assert_eq!(absent.activity(), "Chess Club");
    }
}
