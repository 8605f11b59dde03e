use thiserror::Error;

/// A required form field was left empty.
///
/// Raised synchronously, before any request leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} is required")]
pub struct ValidationError {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status or an envelope with `status: "error"`.
    #[error("{0}")]
    Server(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Dialog title used when the error is shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            Self::Network(_) => "Connection failed",
            Self::Server(_) => "Request failed",
            Self::Validation(_) => "Missing information",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = AppError::from(ValidationError {
            field: "name",
            label: "Name",
        });
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(err.title(), "Missing information");
    }

    #[test]
    fn server_error_shows_message_verbatim() {
        let err = AppError::server("Supplier code already exists");
        assert_eq!(err.to_string(), "Supplier code already exists");
    }
}
