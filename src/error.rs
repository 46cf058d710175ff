//! Process-level error type.
//!
//! Exit code conventions:
//! - 2: usage/configuration problems (bad flags, unwritable paths)
//! - 4: internal contract violations (a formatted candidate that fails to
//!   re-parse against its own grammar) and I/O failures while reporting
//!
//! Expected, non-fatal conditions (no admissible longitude window, latitude
//! precondition failures) are *not* errors; they surface as skip diagnostics
//! on the parse result instead.

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

    /// An internal contract violation (exit code 4).
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
