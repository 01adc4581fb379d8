//! # Display Indexes
//!
//! Task ids are UUIDs, which nobody wants to type. Users address tasks by a
//! 1-based index instead: the task's position in the full collection.
//!
//! Tasks are only ever appended and never removed, so an index keeps pointing
//! at the same task for the whole session. Indexes are assigned over the full
//! collection *before* filtering, which means the numbers shown under
//! `show incomplete` are the same numbers shown under `show all`:
//!
//! ```text
//! show all            show incomplete
//!   1. [x] Learn A      3. [ ] Learn C
//!   2. [x] Learn B      4. [ ] Learn D
//!   3. [ ] Learn C
//!   4. [ ] Learn D
//! ```
//!
//! Ranges are accepted wherever a list of indexes is: `2-4` expands to `2 3 4`.
//! A range reaching past the last task is rejected before it is expanded.

use crate::error::{Result, TodozError};
use crate::model::{FilterMode, Task, TaskId};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A user-facing index for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(DisplayIndex(n)),
            _ => Err(TodozError::InvalidIndex(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTask {
    pub index: DisplayIndex,
    #[serde(flatten)]
    pub task: Task,
}

/// Pairs every task with its canonical display index.
pub fn index_tasks(tasks: &[Task]) -> Vec<DisplayTask> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| DisplayTask {
            index: DisplayIndex(i + 1),
            task: task.clone(),
        })
        .collect()
}

/// The filtered view, with indexes taken from the unfiltered collection.
pub fn index_visible(tasks: &[Task], mode: FilterMode) -> Vec<DisplayTask> {
    index_tasks(tasks)
        .into_iter()
        .filter(|dt| mode.admits(&dt.task))
        .collect()
}

/// Resolves display indexes to task ids, failing on the first one that does not exist.
pub fn resolve_indexes(
    tasks: &[Task],
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, TaskId)>> {
    indexes
        .iter()
        .map(|idx| {
            idx.0
                .checked_sub(1)
                .and_then(|pos| tasks.get(pos))
                .map(|task| (*idx, task.id))
                .ok_or(TodozError::IndexNotFound(*idx))
        })
        .collect()
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5)
///
/// Start must be <= end. A range is only expanded once its end fits within
/// `count` tasks; single indexes are checked later, during resolution.
pub fn parse_index_or_range(s: &str, count: usize) -> Result<Vec<DisplayIndex>> {
    if let Some((start, end)) = s.split_once('-') {
        if start.is_empty() {
            return Err(TodozError::InvalidIndex(s.to_string()));
        }
        let start = DisplayIndex::from_str(start)?;
        let end = DisplayIndex::from_str(end)?;
        if start > end {
            return Err(TodozError::InvalidIndex(format!(
                "{} (start {} must be <= end {})",
                s, start, end
            )));
        }
        if end.0 > count {
            return Err(TodozError::IndexNotFound(end));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// Parses a list of index strings against a collection of `count` tasks,
/// expanding ranges in place.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I], count: usize) -> Result<Vec<DisplayIndex>> {
    let mut parsed = Vec::new();
    for input in inputs {
        parsed.extend(parse_index_or_range(input.as_ref(), count)?);
    }
    Ok(parsed)
}
