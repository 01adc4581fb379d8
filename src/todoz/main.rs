//! # Todoz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns its outcome into an exit status.
//!
//! ```text
//! main.rs ──▶ cli (parse lines, render) ──▶ todoz::api ──▶ commands ──▶ session/reducers
//! ```

mod cli;

fn main() {
    match cli::run() {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
