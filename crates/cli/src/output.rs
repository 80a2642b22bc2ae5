//! CLI output formatting utilities.
//!
//! Colored status symbols and printers shared by the `vplc` subcommands.

use owo_colors::{OwoColorize, Stream};

use vovkplc_lib::filter::FilterDecision;

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ADD: &str = "+";
  pub const REMOVE: &str = "-";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// One source file with its verdict: `+` kept, `-` dropped.
pub fn print_source(decision: FilterDecision, path: &str) {
  match decision {
    FilterDecision::Include => println!(
      "  {} {}",
      symbols::ADD.if_supports_color(Stream::Stdout, |s| s.green()),
      path
    ),
    FilterDecision::Exclude => println!(
      "  {} {}",
      symbols::REMOVE.if_supports_color(Stream::Stdout, |s| s.red()),
      path.if_supports_color(Stream::Stdout, |s| s.dimmed())
    ),
  }
}

pub fn plural(count: usize, noun: &str) -> String {
  if count == 1 {
    format!("{} {}", count, noun)
  } else {
    format!("{} {}s", count, noun)
  }
}
