//! Error types for registry lookup and command execution.

use thiserror::Error;

/// Errors surfaced by the command registry and the fail-fast commands.
///
/// Note that `randomize` and `ip` deliberately never return these: their
/// failures are reported as ordinary text results (see the command docs).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The requested name has no registered command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// An argument could not be parsed as the command requires.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = CommandError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "unknown command: frobnicate");

        let err = CommandError::InvalidArgument("not an integer: abc".to_string());
        assert_eq!(err.to_string(), "invalid argument: not an integer: abc");
    }
}
