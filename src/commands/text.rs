//! Text transformation commands: `repeat`, `uppercase`, `count`, `erase`
//! and the static `info` string.

use crate::error::CommandError;
use crate::output::CommandOutput;

/// Identification string returned by the `info` command.
pub const INFO_TEXT: &str = concat!(
    "Executor v",
    env!("CARGO_PKG_VERSION"),
    " by ",
    env!("CARGO_PKG_AUTHORS"),
);

/// `repeat(count, ...words)`: join `words` with single spaces and repeat the
/// result `count` times with no separator.
///
/// Fail-fast: a missing or non-integer `count` is an `InvalidArgument`.
/// A negative count yields the empty string.
pub fn repeat(args: &[&str]) -> Result<CommandOutput, CommandError> {
    let raw_count = args.first().ok_or_else(|| {
        CommandError::InvalidArgument("repeat needs a count argument".to_string())
    })?;
    let copies: i64 = raw_count
        .parse()
        .map_err(|_| CommandError::InvalidArgument(format!("not an integer: {raw_count}")))?;

    let joined = args[1..].join(" ");
    let copies = usize::try_from(copies).unwrap_or(0);
    Ok(CommandOutput::Text(joined.repeat(copies)))
}

/// `uppercase(...words)`: join with single spaces, uppercase the result.
pub fn uppercase(args: &[&str]) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput::Text(args.join(" ").to_uppercase()))
}

/// `count(...words)`: number of whitespace-delimited tokens across all
/// arguments joined with single spaces.
pub fn count(args: &[&str]) -> Result<CommandOutput, CommandError> {
    let tokens = args.join(" ").split_whitespace().count();
    Ok(CommandOutput::Int(tokens as i64))
}

/// `erase()`: the empty string, unconditionally.
pub fn erase(_args: &[&str]) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput::Text(String::new()))
}

/// `info()`: fixed identification string (name, version, author).
pub fn info(_args: &[&str]) -> Result<CommandOutput, CommandError> {
    Ok(CommandOutput::text(INFO_TEXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_concatenates_without_separator() {
        assert_eq!(repeat(&["3", "ab"]), Ok(CommandOutput::text("ababab")));
    }

    #[test]
    fn repeat_joins_words_with_spaces() {
        assert_eq!(repeat(&["1", "x", "y"]), Ok(CommandOutput::text("x y")));
        assert_eq!(
            repeat(&["2", "x", "y"]),
            Ok(CommandOutput::text("x yx y"))
        );
    }

    #[test]
    fn repeat_zero_and_negative_yield_empty() {
        assert_eq!(repeat(&["0", "ab"]), Ok(CommandOutput::text("")));
        assert_eq!(repeat(&["-2", "ab"]), Ok(CommandOutput::text("")));
    }

    #[test]
    fn repeat_rejects_non_integer_count() {
        assert_eq!(
            repeat(&["many", "ab"]),
            Err(CommandError::InvalidArgument(
                "not an integer: many".to_string()
            ))
        );
        assert!(matches!(
            repeat(&[]),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn uppercase_joins_and_upcases() {
        assert_eq!(uppercase(&["a", "bc"]), Ok(CommandOutput::text("A BC")));
        assert_eq!(uppercase(&[]), Ok(CommandOutput::text("")));
    }

    #[test]
    fn count_tokenizes_across_arguments() {
        // An argument may itself contain whitespace-separated tokens.
        assert_eq!(count(&["one two", "three"]), Ok(CommandOutput::Int(3)));
        assert_eq!(count(&[]), Ok(CommandOutput::Int(0)));
        assert_eq!(count(&["  spaced   out  "]), Ok(CommandOutput::Int(2)));
    }

    #[test]
    fn erase_is_always_empty() {
        assert_eq!(erase(&[]), Ok(CommandOutput::text("")));
        assert_eq!(erase(&["ignored", "args"]), Ok(CommandOutput::text("")));
    }

    #[test]
    fn info_names_the_crate_and_version() {
        let out = info(&[]).unwrap().to_string();
        assert!(out.starts_with("Executor v"));
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
    }
}
