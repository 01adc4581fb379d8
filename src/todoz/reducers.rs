//! # Reducers
//!
//! Pure state transitions: given the current state and one action, compute the
//! next state. Neither function touches its input nor performs any I/O.
//!
//! - [`reduce_tasks`]: task collection × [`TaskAction`] → task collection
//! - [`reduce_filter`]: filter mode × [`FilterAction`] → filter mode
//!
//! Completion is two explicit actions rather than a toggle. The reducer never
//! reads a task's current flag to decide what to write; the caller picks
//! `MarkComplete` or `MarkIncomplete`.
//!
//! An id that matches no task is not an error: the collection comes back
//! unchanged.

use crate::actions::{FilterAction, TaskAction};
use crate::model::{FilterMode, Task, TaskId};

pub fn reduce_tasks(tasks: &[Task], action: &TaskAction) -> Vec<Task> {
    match action {
        TaskAction::MarkComplete { id } => set_complete(tasks, id, true),
        TaskAction::MarkIncomplete { id } => set_complete(tasks, id, false),
        TaskAction::AddTask { id, description } => {
            let mut next = Vec::with_capacity(tasks.len() + 1);
            next.extend_from_slice(tasks);
            next.push(Task::new(*id, description.clone()));
            next
        }
    }
}

/// The previous mode never influences the result.
pub fn reduce_filter(_current: FilterMode, action: FilterAction) -> FilterMode {
    match action {
        FilterAction::SetFilterAll => FilterMode::All,
        FilterAction::SetFilterComplete => FilterMode::Complete,
        FilterAction::SetFilterIncomplete => FilterMode::Incomplete,
    }
}

fn set_complete(tasks: &[Task], id: &TaskId, complete: bool) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if &task.id == id {
                Task {
                    complete,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}
