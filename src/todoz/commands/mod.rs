//! # Command Layer
//!
//! One module per user operation. Commands take the session through the
//! [`StateView`](crate::session::StateView) and [`Dispatch`](crate::session::Dispatch)
//! traits, submit actions, and describe what happened in a [`CmdResult`].
//! They never print.

use crate::index::DisplayTask;
use crate::model::{FilterMode, Task};
use serde::Serialize;

pub mod add;
pub mod completion;
pub mod filter;
pub mod list;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Counts across the whole collection, independent of the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<DisplayTask>,
    pub filter: Option<FilterMode>,
    pub counts: Option<TaskCounts>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_counts(mut self, counts: TaskCounts) -> Self {
        self.counts = Some(counts);
        self
    }
}
