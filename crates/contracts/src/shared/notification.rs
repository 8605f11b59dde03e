use super::error::AppError;
use super::mutation::MutationOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A message for the success/failure dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn from_error(err: &AppError) -> Self {
        Self::failure(err.title(), err.to_string())
    }

    pub fn from_outcome(outcome: &MutationOutcome) -> Self {
        Self::success(outcome.kind.success_title(), outcome.message.clone())
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mutation::MutationKind;

    #[test]
    fn errors_become_failures_titled_by_kind() {
        let note = Notification::from_error(&AppError::network("connection refused"));
        assert!(!note.is_success());
        assert_eq!(note.title, "Connection failed");
        assert_eq!(note.message, "Network error: connection refused");
    }

    #[test]
    fn outcomes_become_successes() {
        let note = Notification::from_outcome(&MutationOutcome::fallback(MutationKind::Delete));
        assert!(note.is_success());
        assert_eq!(note.title, "Deleted");
        assert_eq!(note.message, "Record deleted");
    }
}
