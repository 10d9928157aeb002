//! Command result values.
//!
//! Every command produces either a string or a number. The shell renders
//! whichever it gets through `Display`, so inline expansion never needs to
//! care which one came back.

use std::fmt;

/// The value produced by a successful command invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Free-form text, including the empty string.
    Text(String),
    /// An integer result, e.g. a token count.
    Int(i64),
    /// A floating-point result, e.g. a sum.
    Float(f64),
}

impl CommandOutput {
    /// Convenience constructor for text results.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
