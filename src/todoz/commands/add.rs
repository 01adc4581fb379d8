use crate::actions::TaskAction;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodozError};
use crate::session::{Dispatch, StateView};
use uuid::Uuid;

pub fn run<S: StateView + Dispatch>(state: &mut S, description: &str) -> Result<CmdResult> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TodozError::EmptyDescription);
    }

    let id = Uuid::new_v4();
    state.dispatch(
        TaskAction::AddTask {
            id,
            description: description.to_string(),
        }
        .into(),
    );

    let position = state.tasks().len();
    let mut result = CmdResult::default();
    if let Some(task) = state.tasks().last().filter(|t| t.id == id) {
        result.add_message(CmdMessage::success(format!(
            "Task added ({}): {}",
            position, task.description
        )));
        if !state.filter().admits(task) {
            result.add_message(CmdMessage::info(format!(
                "Hidden by the current filter ({})",
                state.filter()
            )));
        }
        result.affected_tasks.push(task.clone());
    }

    Ok(result)
}
