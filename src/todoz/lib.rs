//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic to-do list library** with a small CLI client. The
//! state lives for one session only; nothing about tasks is ever persisted.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses session lines, renders output, owns stdin/stdout  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: index strings → DisplayIndex → commands     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Decides which action to submit, reports a CmdResult      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (session, reducers, projection, actions, model)       │
//! │  - Pure transitions over a Vec<Task> and a FilterMode       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Every change follows the same path: an input becomes an [`actions::Action`],
//! the [`session::Session`] feeds it to the matching reducer and swaps in the
//! returned state, and the visible list is recomputed by
//! [`projection::project`] on the next read.
//!
//! The reducers are total over closed enums. There is no "unknown action"
//! branch to reach at runtime; foreign input (JSON) is validated when it is
//! deserialized.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`session`]: State owner plus the `Dispatch` and `StateView` traits
//! - [`reducers`]: Task and filter transitions
//! - [`projection`]: Filtered view of the collection
//! - [`actions`]: Action values and their wire form
//! - [`model`]: `Task`, `FilterMode`, the seed collection
//! - [`index`]: User-facing 1-based task indexes
//! - [`config`]: Session defaults loaded from `config.json`
//! - [`error`]: Error types

pub mod actions;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod projection;
pub mod reducers;
pub mod session;
