//! Numeric commands: `randomize` and `summarize`.
//!
//! The two commands carry different error policies on purpose. `summarize`
//! is fail-fast and surfaces a parse failure to the caller; `randomize`
//! reports its failures as an ordinary text result and never errors.

use rand::Rng;

use crate::error::CommandError;
use crate::output::CommandOutput;

/// Message returned by `randomize` when its arguments are unusable.
pub const RANDOMIZE_USAGE: &str = "Invalid arguments. Please provide numbers.";

/// `randomize(low, high)`: uniform random integer in the inclusive range
/// `[low, high]`. Bounds given in the wrong order are swapped.
///
/// Non-throwing contract: wrong arity or unparseable bounds produce the
/// fixed [`RANDOMIZE_USAGE`] message as a normal text result.
pub fn randomize(args: &[&str]) -> Result<CommandOutput, CommandError> {
    let (low, high) = match args {
        [a, b] => match (a.parse::<i64>(), b.parse::<i64>()) {
            (Ok(low), Ok(high)) => (low, high),
            _ => return Ok(CommandOutput::text(RANDOMIZE_USAGE)),
        },
        _ => return Ok(CommandOutput::text(RANDOMIZE_USAGE)),
    };

    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    Ok(CommandOutput::Int(rand::rng().random_range(low..=high)))
}

/// `summarize(...numbers)`: parse each argument as a float and sum them.
///
/// Fail-fast: any unparseable argument is an `InvalidArgument`. An empty
/// argument list sums to `0.0`.
pub fn summarize(args: &[&str]) -> Result<CommandOutput, CommandError> {
    let mut total = 0.0;
    for arg in args {
        let value: f64 = arg
            .parse()
            .map_err(|_| CommandError::InvalidArgument(format!("not a number: {arg}")))?;
        total += value;
    }
    Ok(CommandOutput::Float(total))
}
