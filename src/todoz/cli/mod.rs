//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! For the overall architecture, see the crate-level documentation of the
//! `todoz` library.
//!
//! ## Sessions
//!
//! Tasks live in memory for exactly one run. A run reads *session lines*:
//!
//! - `todoz -c "show incomplete" -c "add Learn D" -c list` runs the given
//!   lines in order and exits.
//! - `todoz` alone reads lines from stdin until EOF or `quit`, with a `> `
//!   prompt when stdin is a terminal. Piping a file of lines works the same way;
//!   blank lines and lines starting with `#` are skipped.
//!
//! Each line is parsed by clap ([`setup::SessionLine`]), so every command has
//! `--help` and helpful errors for free.
//!
//! ## Toggling
//!
//! The library only knows two completion actions, "mark complete" and "mark
//! incomplete". `toggle` is resolved against the task's current state before
//! anything is dispatched; `done`/`undo` pick the action directly.
//!
//! ## Exit Status
//!
//! A line that fails (bad index, unknown command, empty description) prints
//! `Error: ...` or clap's message on stderr and the session continues. The
//! process exits with status 1 if any line failed.
//!
//! ## Module Layout
//!
//! - `setup.rs`: clap definitions for process arguments and session lines
//! - `commands.rs`: context setup, the line loop, per-command handlers
//! - `render.rs`: `CmdResult` → terminal text
//! - `theme.rs`, `styles.rs`, `templates.rs`: named styles and the templates that use them

mod commands;
mod render;
mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;

use tracing_subscriber::EnvFilter;

/// Sends `tracing` output to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "todoz=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
