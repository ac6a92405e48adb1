//! Error types for gopher.
//!
//! The animation itself never surfaces errors to the caller: writer failures inside
//! the render loop are logged and swallowed. The variants here cover the places where
//! a caller can actually act on a failure, such as parsing user input or running a
//! wrapped command.

use thiserror::Error;

/// The main error type for gopher operations.
#[derive(Error, Debug)]
pub enum GopherError {
    /// A name that does not match any known activity or color
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A wrapped command could not be started or awaited
    #[error("Command `{program}` failed")]
    Command {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for gopher operations.
pub type Result<T> = std::result::Result<T, GopherError>;

impl GopherError {
    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a Command error for the given program
    pub fn command(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Command {
            program: program.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_messages() {
        let invalid = GopherError::invalid_argument("unknown color `pink`");
        assert_eq!(invalid.to_string(), "Invalid argument: unknown color `pink`");

        let command = GopherError::command(
            "sleep",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(command.to_string(), "Command `sleep` failed");
    }

    #[test]
    fn test_command_error_keeps_source() {
        let err = GopherError::command(
            "make",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("command error has a source");
        assert_eq!(source.to_string(), "denied");
        assert!(matches!(err, GopherError::Command { .. }));
    }
}
