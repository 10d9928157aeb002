//! # Built-in Commands
//!
//! The operations behind every registered command name. Each command is a
//! plain function from a slice of string arguments to a
//! [`CommandOutput`](crate::output::CommandOutput), grouped here by concern:
//!
//! - [`text`]: single-pass string transformations
//! - [`numeric`]: integer/float parsing and arithmetic
//! - [`network`]: the one outbound lookup

pub mod network;
pub mod numeric;
pub mod text;
