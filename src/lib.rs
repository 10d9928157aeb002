//! # Executor - Inline Text Command Engine
//!
//! A small set of text/number utility commands dispatched by name through an
//! immutable registry, plus an expander that finds `{command args}>`
//! patterns embedded in free text and substitutes the command result in
//! place.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   {command args}>   ┌──────────┐   name, args   ┌──────────┐
//! │  caller   │────────────────────►│ Expander │───────────────►│ Registry │
//! │ (shell,   │                     │          │                │          │
//! │  tests)   │◄────────────────────│ rewrite  │◄───────────────│ dispatch │
//! └───────────┘   expanded text     └──────────┘   output/error └──────────┘
//! ```
//!
//! Two error policies coexist and are part of the contract: `repeat` and
//! `summarize` fail fast with [`CommandError::InvalidArgument`], while
//! `randomize` and `ip` catch their failures and report them as ordinary
//! text results.

pub mod cmd_args;
pub mod commands;
pub mod config;
pub mod error;
pub mod expand;
pub mod output;
pub mod registry;

// Re-export main types for easy access
pub use error::CommandError;
pub use expand::Expander;
pub use output::CommandOutput;
pub use registry::{CommandFn, CommandRegistry, RegisteredCommand};
