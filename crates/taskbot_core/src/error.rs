use std::fmt;

/// Recoverable failures, surfaced to the user as chat replies or startup
/// diagnostics. None of these abort the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Bad command line: unknown keyword, malformed index or date, or a
    /// reversed event range.
    InvalidInput(String),
    /// Unreadable content in the task or config file.
    InvalidData(String),
    /// Filesystem failure while loading or saving.
    Io(String),
}

impl AppError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    /// Stable machine-readable tag, also the first half of `Display`.
    pub fn code(&self) -> &'static str {
        self.parts().0
    }

    pub fn message(&self) -> &str {
        self.parts().1
    }

    fn parts(&self) -> (&'static str, &str) {
        match self {
            Self::InvalidInput(message) => ("invalid_input", message),
            Self::InvalidData(message) => ("invalid_data", message),
            Self::Io(message) => ("io_error", message),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (code, message) = self.parts();
        write!(f, "{code} - {message}")
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn codes_match_variants() {
        assert_eq!(AppError::invalid_input("x").code(), "invalid_input");
        assert_eq!(AppError::invalid_data("x").code(), "invalid_data");
        assert_eq!(AppError::io("x").code(), "io_error");
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = AppError::invalid_input("task number must be a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid_input - task number must be a positive integer"
        );
    }

    #[test]
    fn converts_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::from(io_err);
        assert_eq!(err.code(), "io_error");
        assert!(err.message().contains("gone"));
    }
}
