use crate::actions::TaskAction;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_indexes, DisplayIndex};
use crate::model::TaskId;
use crate::session::{Dispatch, StateView};

pub fn complete<S: StateView + Dispatch>(
    state: &mut S,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    set_state(state, indexes, |_| true)
}

pub fn incomplete<S: StateView + Dispatch>(
    state: &mut S,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    set_state(state, indexes, |_| false)
}

/// Flips each task: complete ones are marked incomplete and vice versa.
pub fn toggle<S: StateView + Dispatch>(
    state: &mut S,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    set_state(state, indexes, |was_complete| !was_complete)
}

/// Resolves every index up front so a bad index changes nothing, then
/// dispatches one explicit action per task. `target` picks the new flag from
/// the task's current one.
fn set_state<S, F>(state: &mut S, indexes: &[DisplayIndex], target: F) -> Result<CmdResult>
where
    S: StateView + Dispatch,
    F: Fn(bool) -> bool,
{
    let resolved = resolve_indexes(state.tasks(), indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let Some(was_complete) = current_flag(state, &id) else {
            continue;
        };
        let complete = target(was_complete);

        let action = if complete {
            TaskAction::MarkComplete { id }
        } else {
            TaskAction::MarkIncomplete { id }
        };
        state.dispatch(action.into());

        let Some(task) = state.tasks().iter().find(|t| t.id == id) else {
            continue;
        };
        if was_complete == complete {
            let already = if complete { "complete" } else { "incomplete" };
            result.add_message(CmdMessage::warning(format!(
                "Task already {} ({}): {}",
                already, display_index, task.description
            )));
        } else {
            let verb = if complete { "completed" } else { "reopened" };
            result.add_message(CmdMessage::success(format!(
                "Task {} ({}): {}",
                verb, display_index, task.description
            )));
        }
        result.affected_tasks.push(task.clone());
    }

    Ok(result)
}

fn current_flag<S: StateView>(state: &S, id: &TaskId) -> Option<bool> {
    state
        .tasks()
        .iter()
        .find(|t| &t.id == id)
        .map(|t| t.complete)
}
