use crate::error::TodozError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of a task, assigned once at creation.
pub type TaskId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub complete: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            complete: false,
        }
    }

    fn seeded(description: &str, complete: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.to_string(),
            complete,
        }
    }
}

/// Which slice of the collection is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterMode {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl FilterMode {
    /// Whether a task belongs to this view.
    pub fn admits(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Complete => task.complete,
            FilterMode::Incomplete => !task.complete,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::All => "all",
            FilterMode::Complete => "complete",
            FilterMode::Incomplete => "incomplete",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterMode {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "complete" => Ok(FilterMode::Complete),
            "incomplete" => Ok(FilterMode::Incomplete),
            _ => Err(TodozError::InvalidFilter(s.to_string())),
        }
    }
}

/// The collection every session starts from: two complete tasks, one open.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::seeded("Learn React", true),
        Task::seeded("Learn Firebase", true),
        Task::seeded("Learn GraphQL", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(Uuid::new_v4(), "Write tests");
        assert!(!task.complete);
        assert_eq!(task.description, "Write tests");
    }

    #[test]
    fn seed_has_two_complete_one_incomplete() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 3);
        assert_eq!(seed.iter().filter(|t| t.complete).count(), 2);
        assert!(!seed[2].complete);
        assert_eq!(seed[2].description, "Learn GraphQL");
    }

    #[test]
    fn seed_ids_are_unique() {
        let seed = seed_tasks();
        assert_ne!(seed[0].id, seed[1].id);
        assert_ne!(seed[1].id, seed[2].id);
        assert_ne!(seed[0].id, seed[2].id);
    }

    #[test]
    fn filter_parsing() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("COMPLETE".parse::<FilterMode>().unwrap(), FilterMode::Complete);
        assert_eq!(
            "Incomplete".parse::<FilterMode>().unwrap(),
            FilterMode::Incomplete
        );
        assert!(matches!(
            "pending".parse::<FilterMode>(),
            Err(TodozError::InvalidFilter(_))
        ));
    }

    #[test]
    fn filter_serializes_uppercase() {
        let json = serde_json::to_string(&FilterMode::Incomplete).unwrap();
        assert_eq!(json, "\"INCOMPLETE\"");
        let parsed: FilterMode = serde_json::from_str("\"COMPLETE\"").unwrap();
        assert_eq!(parsed, FilterMode::Complete);
    }

    #[test]
    fn task_serializes_with_plain_fields() {
        let id = Uuid::new_v4();
        let task = Task::new(id, "Ship it");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], id.to_string());
        assert_eq!(value["description"], "Ship it");
        assert_eq!(value["complete"], false);
    }
}
