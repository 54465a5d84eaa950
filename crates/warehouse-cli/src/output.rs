//! Output formatting helpers.
//!
//! Only the response body goes to stdout; everything else goes to stderr so
//! the body can be piped.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    eprintln!("{}: {}", label.dimmed(), value);
}

/// Print a response body exactly as received.
pub fn body(body: &str) {
    print!("{}", body);
}

/// Print a JSON value pretty-printed.
pub fn json_pretty(value: &Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
