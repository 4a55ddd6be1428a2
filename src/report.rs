//! Reporters for the loaded environment.

use std::env;
use std::io::{self, Write};

/// Fixed greeting printed by [`print_hello`].
pub const GREETING: &str = "Hello world, my name is alexandre!";

/// Label printed in front of the secret value.
pub const PASSWORD_LABEL: &str = "Password:";

/// Variable read by [`print_password`].
pub const DEFAULT_SECRET_KEY: &str = "PASSWORD";

/// Printed in place of a value that is not set.
pub const ABSENT: &str = "None";

/// Write the greeting line.
pub fn write_hello<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", GREETING)
}

/// Print the greeting to standard output.
pub fn print_hello() -> io::Result<()> {
    write_hello(&mut io::stdout().lock())
}

/// Render the secret line for a looked-up value.
pub fn secret_line(value: Option<&str>) -> String {
    format!("{} {}", PASSWORD_LABEL, value.unwrap_or(ABSENT))
}

/// Look `key` up in the process environment and write the secret line.
///
/// A value that is not valid Unicode is reported as absent.
pub fn write_password<W: Write>(out: &mut W, key: &str) -> io::Result<()> {
    let value = env::var(key).ok();
    tracing::debug!(key, present = value.is_some(), "reporting secret");
    writeln!(out, "{}", secret_line(value.as_deref()))
}

/// Print the `PASSWORD` line to standard output.
pub fn print_password() -> io::Result<()> {
    write_password(&mut io::stdout().lock(), DEFAULT_SECRET_KEY)
}

/// Successor of `i`. Wraps at `i64::MAX`.
pub fn inc_num(i: i64) -> i64 {
    i.wrapping_add(1)
}
