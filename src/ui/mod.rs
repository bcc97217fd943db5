//! User interface module - terminal output for the command line tool.
//!
//! Machine-readable results (changelog text, versions) go to stdout
//! unstyled so they can be piped. Status and error messages are styled with
//! `console` and go to stderr.

pub mod formatter;

pub use formatter::{display_error, display_status, display_success, format_next_version};
