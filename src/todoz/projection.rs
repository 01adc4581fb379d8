use crate::model::{FilterMode, Task};

/// Selects the tasks visible under `mode`, keeping their relative order.
///
/// Borrowed from the collection: callers recompute after every state change
/// rather than holding on to a stale view.
pub fn project(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.admits(task)).collect()
}
