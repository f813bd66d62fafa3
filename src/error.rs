//! Application error type.
//!
//! Every failure carries the process exit code it maps to, so `main` only has
//! to print the message and exit.

/// Input missing, unreadable, or malformed.
pub const EXIT_INPUT: u8 = 2;
/// Results or report file could not be written.
pub const EXIT_OUTPUT: u8 = 3;
/// Parameters were read but cannot produce an objective value.
pub const EXIT_EVALUATION: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    pub fn output(message: impl Into<String>) -> Self {
        Self::new(EXIT_OUTPUT, message)
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::new(EXIT_EVALUATION, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_map_to_exit_codes() {
        assert_eq!(AppError::input("x").exit_code(), EXIT_INPUT);
        assert_eq!(AppError::output("x").exit_code(), EXIT_OUTPUT);
        assert_eq!(AppError::evaluation("x").exit_code(), EXIT_EVALUATION);
    }

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::input("cannot open input 'a.in'");
        assert_eq!(err.to_string(), "cannot open input 'a.in'");
    }
}
