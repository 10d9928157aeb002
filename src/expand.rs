//! # Inline Command Expansion
//!
//! Finds a `{command args}>` pattern embedded in free text, runs the named
//! command and substitutes its output in place. This is the user-facing
//! surface: commands are typed inside whatever text is being edited and the
//! expander rewrites the text around them.

use regex::Regex;

use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Pattern marking an embedded command: `{name arg arg}>`.
const COMMAND_PATTERN: &str = r"\{(.+?)\}>";

/// Expands inline `{command args}>` occurrences against a registry.
pub struct Expander {
    registry: CommandRegistry,
    pattern: Regex,
}

impl Expander {
    /// Create an expander over the default command set.
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::new())
    }

    /// Create an expander over a specific registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            registry,
            // The pattern is a literal constant; it always compiles.
            pattern: Regex::new(COMMAND_PATTERN).expect("static pattern"),
        }
    }

    /// Access the underlying registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Expand the first embedded command in `text`.
    ///
    /// Returns `None` when there is nothing to do: no pattern present, or
    /// the named command is not registered. `erase` collapses the entire
    /// text, not just the matched pattern. A failing fail-fast command has
    /// its error description substituted instead.
    pub fn expand(&self, text: &str) -> Option<String> {
        let found = self.pattern.find(text)?;
        let interior = &text[found.start() + 1..found.end() - 2];

        let mut parts = interior.split(' ').filter(|p| !p.is_empty());
        let name = parts.next()?;
        let args: Vec<&str> = parts.collect();
        tracing::debug!("expanding command {name:?} with args {args:?}");

        let replacement = match name {
            "help" => self.help_text(),
            "erase" => return Some(String::new()),
            _ => match self.registry.dispatch(name, &args) {
                Ok(output) => output.to_string(),
                Err(CommandError::UnknownCommand(_)) => {
                    tracing::debug!("unknown command {name:?}, leaving text untouched");
                    return None;
                }
                Err(err) => err.to_string(),
            },
        };

        let mut expanded = String::with_capacity(text.len() + replacement.len());
        expanded.push_str(&text[..found.start()]);
        expanded.push_str(&replacement);
        expanded.push_str(&text[found.end()..]);
        Some(expanded)
    }

    /// Help text listing the module identity and every registered command.
    pub fn help_text(&self) -> String {
        let mut help = String::from("Available commands:\n\n");
        help.push_str(&format!(
            "Module: {}, author: {}\n",
            CommandRegistry::MODULE_NAME,
            CommandRegistry::MODULE_AUTHOR,
        ));
        for name in self.registry.names() {
            // Names are registered as static strings, so lookup cannot miss.
            if let Ok(command) = self.registry.lookup(name) {
                help.push_str(&format!("  {name} - {}\n", command.summary()));
            }
        }
        help.push_str("  help - list available commands\n");
        help
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}
