//! Output templates, kept as stand-alone files and embedded at compile time.
//!
//! Templates are minijinja. Line breaks are explicit in the files: each loop
//! body ends with its own newline, and the trailing newline of a file is
//! dropped by the engine.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.jinja");
