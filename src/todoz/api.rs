//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for todoz operations, whichever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (index strings and ranges → display indexes)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business logic.
//!
//! `TodozApi<S>` is generic over the state owner, so UIs and tests can supply
//! anything that implements both [`StateView`] and [`Dispatch`]. The CLI uses
//! a plain [`Session`].

use crate::commands;
use crate::error::Result;
use crate::index::parse_indexes;
use crate::model::FilterMode;
use crate::session::{Dispatch, Session, StateView};

pub struct TodozApi<S: StateView + Dispatch = Session> {
    state: S,
}

impl<S: StateView + Dispatch> TodozApi<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn add_task(&mut self, description: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.state, description)
    }

    pub fn complete_tasks<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.state.tasks().len())?;
        commands::completion::complete(&mut self.state, &indexes)
    }

    pub fn reopen_tasks<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.state.tasks().len())?;
        commands::completion::incomplete(&mut self.state, &indexes)
    }

    pub fn toggle_tasks<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.state.tasks().len())?;
        commands::completion::toggle(&mut self.state, &indexes)
    }

    pub fn set_filter(&mut self, mode: FilterMode) -> Result<commands::CmdResult> {
        commands::filter::run(&mut self.state, mode)
    }

    pub fn list_tasks(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.state)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.state)
    }

    pub fn state(&self) -> &S {
        &self.state
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, TaskCounts};
