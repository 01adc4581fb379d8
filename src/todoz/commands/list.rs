use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::StateView;

pub fn run<S: StateView>(state: &S) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_tasks(state.visible_indexed())
        .with_filter(state.filter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FilterAction, TaskAction};
    use crate::index::DisplayIndex;
    use crate::model::FilterMode;
    use crate::session::{Dispatch, Session};
    use uuid::Uuid;

    #[test]
    fn lists_everything_by_default() {
        let session = Session::seeded();
        let result = run(&session).unwrap();
        assert_eq!(result.listed_tasks.len(), 3);
        assert_eq!(result.filter, Some(FilterMode::All));
    }

    #[test]
    fn filtered_list_keeps_canonical_indexes() {
        let mut session = Session::seeded();
        session.dispatch(FilterAction::SetFilterIncomplete.into());
        session.dispatch(
            TaskAction::AddTask {
                id: Uuid::new_v4(),
                description: "Learn D".into(),
            }
            .into(),
        );

        let result = run(&session).unwrap();
        let indexes: Vec<DisplayIndex> = result.listed_tasks.iter().map(|dt| dt.index).collect();
        assert_eq!(indexes, vec![DisplayIndex(3), DisplayIndex(4)]);
    }

    #[test]
    fn empty_session_lists_nothing() {
        let session = Session::empty();
        assert!(run(&session).unwrap().listed_tasks.is_empty());
    }
}
