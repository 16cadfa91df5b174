//! Terminal output helpers.
//!
//! Color is applied only when the target stream is a terminal, so piped
//! output stays plain.

pub mod prompt;
pub mod table;

use owo_colors::{OwoColorize, Stream};

/// Print a success line in green.
pub fn success(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.green())
    );
}

/// Print a warning line in yellow.
pub fn warn(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.yellow())
    );
}

/// Print a de-emphasized line.
pub fn note(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.dimmed())
    );
}

/// Print a highlighted line in cyan.
pub fn accent(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.cyan())
    );
}

/// Print a bold line.
pub fn emphasis(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| text.bold())
    );
}

/// Print a bold yellow heading, used for warning banners.
pub fn heading(message: &str) {
    println!(
        "{}",
        message.if_supports_color(Stream::Stdout, |text| {
            text.style(owo_colors::Style::new().yellow().bold())
        })
    );
}

/// Print an error line in red to stderr.
pub fn error_line(message: &str) {
    eprintln!(
        "{}",
        message.if_supports_color(Stream::Stderr, |text| text.red())
    );
}

/// Print a failure message with the standard error prefix.
pub fn print_error(message: &str) {
    error_line(&format!("Error: {message}"));
}
