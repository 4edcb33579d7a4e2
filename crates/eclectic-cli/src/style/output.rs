//! Output helper functions for consistent styled messages.

use owo_colors::Stream;

use super::colors::{Role, SemanticStyle};

/// Prints a success message with a checkmark.
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".success(), msg);
}

/// Prints an error message with an X mark to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", Role::Error.paint(&"✗", Stream::Stderr), msg);
}

/// Prints a labeled key-value pair with indentation.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {}", key.muted(), value);
}

/// Prints a dimmed line, for footers and hints.
pub fn muted_line(msg: &str) {
    println!("{}", msg.muted());
}
