use crate::commands::{CmdMessage, CmdResult, TaskCounts};
use crate::error::Result;
use crate::session::StateView;

pub fn run<S: StateView>(state: &S) -> Result<CmdResult> {
    let tasks = state.tasks();
    let complete = tasks.iter().filter(|t| t.complete).count();
    let counts = TaskCounts {
        total: tasks.len(),
        complete,
        incomplete: tasks.len() - complete,
    };

    let mut result = CmdResult::default()
        .with_counts(counts)
        .with_filter(state.filter());
    if counts.total > 0 && counts.incomplete == 0 {
        result.add_message(CmdMessage::success("All tasks complete."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::completion;
    use crate::index::DisplayIndex;
    use crate::session::Session;

    #[test]
    fn counts_seed() {
        let session = Session::seeded();
        let result = run(&session).unwrap();
        assert_eq!(
            result.counts,
            Some(TaskCounts {
                total: 3,
                complete: 2,
                incomplete: 1
            })
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn celebrates_when_everything_is_done() {
        let mut session = Session::seeded();
        completion::complete(&mut session, &[DisplayIndex(3)]).unwrap();
        let result = run(&session).unwrap();
        assert_eq!(result.counts.unwrap().incomplete, 0);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_session_has_zero_counts() {
        let result = run(&Session::empty()).unwrap();
        assert_eq!(result.counts, Some(TaskCounts::default()));
        assert!(result.messages.is_empty());
    }
}
