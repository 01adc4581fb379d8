use crate::actions::FilterAction;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::FilterMode;
use crate::session::{Dispatch, StateView};

pub fn run<S: StateView + Dispatch>(state: &mut S, mode: FilterMode) -> Result<CmdResult> {
    state.dispatch(FilterAction::selecting(mode).into());

    Ok(CmdResult::default()
        .with_listed_tasks(state.visible_indexed())
        .with_filter(state.filter()))
}
