//! Action values: immutable descriptions of one requested state transition.
//!
//! The two action sets are closed enums. Reducers match on them exhaustively,
//! so an action of an unknown kind cannot be constructed, let alone reach a
//! reducer. Input coming from outside the type system (JSON) is checked at
//! deserialization, where an unknown `type` tag is a parse error.
//!
//! The serialized tags are the action-kind names used on the wire:
//!
//! ```text
//! {"type": "DO_TODO",   "id": "<uuid>"}
//! {"type": "UNDO_TODO", "id": "<uuid>"}
//! {"type": "ADD_TODO",  "id": "<uuid>", "task": "Learn Rust"}
//! {"type": "SHOW_ALL"} | {"type": "SHOW_COMPLETE"} | {"type": "SHOW_INCOMPLETE"}
//! ```

use crate::model::{FilterMode, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TaskAction {
    #[serde(rename = "DO_TODO")]
    MarkComplete { id: TaskId },
    #[serde(rename = "UNDO_TODO")]
    MarkIncomplete { id: TaskId },
    #[serde(rename = "ADD_TODO")]
    AddTask {
        id: TaskId,
        #[serde(rename = "task")]
        description: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterAction {
    #[serde(rename = "SHOW_ALL")]
    SetFilterAll,
    #[serde(rename = "SHOW_COMPLETE")]
    SetFilterComplete,
    #[serde(rename = "SHOW_INCOMPLETE")]
    SetFilterIncomplete,
}

impl FilterAction {
    /// The action that selects `mode`.
    pub fn selecting(mode: FilterMode) -> Self {
        match mode {
            FilterMode::All => FilterAction::SetFilterAll,
            FilterMode::Complete => FilterAction::SetFilterComplete,
            FilterMode::Incomplete => FilterAction::SetFilterIncomplete,
        }
    }
}

/// Anything the presentation layer may submit to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    Task(TaskAction),
    Filter(FilterAction),
}

impl From<TaskAction> for Action {
    fn from(action: TaskAction) -> Self {
        Action::Task(action)
    }
}

impl From<FilterAction> for Action {
    fn from(action: FilterAction) -> Self {
        Action::Filter(action)
    }
}
