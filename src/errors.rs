use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while reading input or writing output: {0}")]
    Io(#[from] std::io::Error),

    /// Carries the name that was looked up.
    #[error("Contact not found.")]
    NotFound(String),

    /// Carries the raw menu input.
    #[error("Invalid choice. Please try again.")]
    ParseCommand(String),

    /// Carries the rejected phone number.
    #[error("Invalid phone number. Please enter a valid phone number.")]
    InvalidPhone(String),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl AppError {
    /// Errors the menu reports to the user and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::ParseCommand(_) | AppError::InvalidPhone(_)
        )
    }
}
