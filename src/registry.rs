//! # Command Registry
//!
//! Immutable name-to-operation mapping. The registry is built once with the
//! default command set and dispatches by exact, case-sensitive name match.

use std::collections::HashMap;

use crate::commands::{network, numeric, text};
use crate::error::CommandError;
use crate::output::CommandOutput;

/// Signature shared by every command operation.
pub type CommandFn = fn(&[&str]) -> Result<CommandOutput, CommandError>;

/// A named command with its one-line summary (shown by `help`).
#[derive(Debug, Clone)]
pub struct RegisteredCommand {
    name: &'static str,
    summary: &'static str,
    run: CommandFn,
}

impl RegisteredCommand {
    /// Command name used for lookup.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description for help output.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Run the command with the given arguments.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        (self.run)(args)
    }
}

/// Registry of all available commands.
///
/// Built once at startup and never mutated afterwards; lookup itself has no
/// side effects.
pub struct CommandRegistry {
    commands: HashMap<&'static str, RegisteredCommand>,
}

impl CommandRegistry {
    /// Module identity used by help output.
    pub const MODULE_NAME: &'static str = "Built-in";

    /// Module author used by help output.
    pub const MODULE_AUTHOR: &'static str = env!("CARGO_PKG_AUTHORS");

    /// Create a new registry with the default command set.
    pub fn new() -> Self {
        let mut registry = Self {
            commands: HashMap::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.register("repeat", "repeat joined words N times", text::repeat);
        self.register("uppercase", "uppercase the joined words", text::uppercase);
        self.register("count", "count whitespace-delimited tokens", text::count);
        self.register("erase", "clear the text", text::erase);
        self.register("info", "show name, version and author", text::info);
        self.register(
            "randomize",
            "random integer in an inclusive range",
            numeric::randomize,
        );
        self.register("summarize", "sum the numeric arguments", numeric::summarize);
        self.register("ip", "look up public IP and country", network::ip);
    }

    fn register(&mut self, name: &'static str, summary: &'static str, run: CommandFn) {
        self.commands.insert(
            name,
            RegisteredCommand { name, summary, run },
        );
    }

    /// Look up a command by exact name.
    pub fn lookup(&self, name: &str) -> Result<&RegisteredCommand, CommandError> {
        self.commands.get(name).ok_or_else(|| {
            tracing::debug!("no command registered under {name:?}");
            CommandError::UnknownCommand(name.to_string())
        })
    }

    /// Look up and run a command in one step.
    pub fn dispatch(&self, name: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let command = self.lookup(name)?;
        tracing::debug!("dispatching {name:?} with {} argument(s)", args.len());
        command.run(args)
    }

    /// Registered command names, sorted for stable help output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_NAMES: &[&str] = &[
        "count",
        "erase",
        "info",
        "ip",
        "randomize",
        "repeat",
        "summarize",
        "uppercase",
    ];

    #[test]
    fn registry_contains_every_default_command() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.command_count(), DEFAULT_NAMES.len());
        assert_eq!(registry.names(), DEFAULT_NAMES);
        for name in DEFAULT_NAMES {
            let command = registry.lookup(name).expect("registered");
            assert_eq!(command.name(), *name);
            assert!(!command.summary().is_empty());
        }
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.lookup("REPEAT").unwrap_err(),
            CommandError::UnknownCommand("REPEAT".to_string())
        );
        assert!(registry.lookup("repeat ").is_err());
        assert!(registry.lookup("").is_err());
    }

    #[test]
    fn dispatch_runs_the_named_command() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch("uppercase", &["a", "bc"]),
            Ok(CommandOutput::text("A BC"))
        );
        assert_eq!(
            registry.dispatch("count", &["one two", "three"]),
            Ok(CommandOutput::Int(3))
        );
    }

    #[test]
    fn dispatch_unknown_name_signals_unknown_command() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch("frobnicate", &[]),
            Err(CommandError::UnknownCommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn dispatch_preserves_per_command_error_policy() {
        let registry = CommandRegistry::new();
        // Fail-fast command errors out.
        assert!(registry.dispatch("summarize", &["x"]).is_err());
        // Swallow-and-report command never does.
        assert!(registry.dispatch("randomize", &["a", "1"]).is_ok());
    }
}
