//! # Session State
//!
//! A [`Session`] is the single owner of the task collection and the filter mode
//! for one run of the program. It holds no references to anything else and is
//! never shared across threads.
//!
//! Anything that needs to change state receives the [`Dispatch`] capability
//! explicitly (`&mut impl Dispatch`) and submits [`Action`] values. Readers
//! go through [`StateView`]; the visible list is recomputed from scratch on
//! every call.

use crate::actions::{Action, FilterAction, TaskAction};
use crate::index::{index_visible, DisplayTask};
use crate::model::{seed_tasks, FilterMode, Task};
use crate::projection::project;
use crate::reducers::{reduce_filter, reduce_tasks};
use tracing::debug;

/// The capability to submit actions.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Read access to the current state.
pub trait StateView {
    fn tasks(&self) -> &[Task];

    fn filter(&self) -> FilterMode;

    /// The projection of the collection under the current filter.
    fn visible(&self) -> Vec<&Task> {
        project(self.tasks(), self.filter())
    }

    /// The projection, paired with display indexes.
    fn visible_indexed(&self) -> Vec<DisplayTask> {
        index_visible(self.tasks(), self.filter())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    tasks: Vec<Task>,
    filter: FilterMode,
}

impl Session {
    /// A session starting from the example tasks with every task visible.
    pub fn seeded() -> Self {
        Self::with_state(seed_tasks(), FilterMode::All)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_state(tasks: Vec<Task>, filter: FilterMode) -> Self {
        Self { tasks, filter }
    }
}

impl StateView for Session {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn filter(&self) -> FilterMode {
        self.filter
    }
}

impl Dispatch for Session {
    fn dispatch(&mut self, action: Action) {
        debug!(
            action = %serde_json::to_string(&action).unwrap_or_default(),
            "dispatch"
        );
        match action {
            Action::Task(action) => self.apply_task(&action),
            Action::Filter(action) => self.apply_filter(action),
        }
    }
}

impl Session {
    fn apply_task(&mut self, action: &TaskAction) {
        self.tasks = reduce_tasks(&self.tasks, action);
    }

    fn apply_filter(&mut self, action: FilterAction) {
        self.filter = reduce_filter(self.filter, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn descriptions(session: &Session) -> Vec<String> {
        session
            .visible()
            .iter()
            .map(|t| t.description.clone())
            .collect()
    }

    #[test]
    fn seeded_session_shows_all() {
        let session = Session::seeded();
        assert_eq!(session.filter(), FilterMode::All);
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn empty_session_has_no_tasks() {
        let session = Session::empty();
        assert!(session.tasks().is_empty());
        assert_eq!(session.filter(), FilterMode::All);
    }

    #[test]
    fn filter_then_add_then_complete_walkthrough() {
        let tasks = vec![
            Task {
                id: Uuid::new_v4(),
                description: "Learn A".into(),
                complete: true,
            },
            Task {
                id: Uuid::new_v4(),
                description: "Learn B".into(),
                complete: true,
            },
            Task {
                id: Uuid::new_v4(),
                description: "Learn C".into(),
                complete: false,
            },
        ];
        let learn_c = tasks[2].id;
        let mut session = Session::with_state(tasks, FilterMode::All);

        session.dispatch(FilterAction::SetFilterIncomplete.into());
        assert_eq!(descriptions(&session), vec!["Learn C"]);

        session.dispatch(
            TaskAction::AddTask {
                id: Uuid::new_v4(),
                description: "Learn D".into(),
            }
            .into(),
        );
        assert_eq!(session.tasks().len(), 4);
        assert_eq!(session.filter(), FilterMode::Incomplete);
        assert_eq!(descriptions(&session), vec!["Learn C", "Learn D"]);

        session.dispatch(TaskAction::MarkComplete { id: learn_c }.into());
        assert_eq!(descriptions(&session), vec!["Learn D"]);
    }

    #[test]
    fn task_actions_leave_filter_alone() {
        let mut session = Session::seeded();
        session.dispatch(FilterAction::SetFilterComplete.into());
        let id = session.tasks()[2].id;
        session.dispatch(TaskAction::MarkComplete { id }.into());
        assert_eq!(session.filter(), FilterMode::Complete);
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn dispatch_through_passed_capability() {
        fn submit(dispatcher: &mut impl Dispatch, action: Action) {
            dispatcher.dispatch(action);
        }

        let mut session = Session::seeded();
        submit(&mut session, FilterAction::SetFilterComplete.into());
        assert_eq!(session.visible_indexed().len(), 2);
    }
}
