// Data models for TaskList

use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub is_completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Task {
    /// Create an open task with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        let now = now_ms();
        Self {
            id: new_id(),
            name: name.into(),
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this task, keeping the id
    ///
    /// Returns true if any field actually changed.
    pub fn apply(&mut self, patch: &TaskPatch) -> bool {
        let mut changed = false;

        if let Some(name) = patch.name.as_ref().filter(|n| **n != self.name) {
            self.name = name.clone();
            changed = true;
        }

        if let Some(done) = patch.is_completed.filter(|d| *d != self.is_completed) {
            self.is_completed = done;
            changed = true;
        }

        if changed {
            self.updated_at = now_ms();
        }
        changed
    }

    /// First eight characters of the id, for display
    pub fn short_id(&self) -> &str {
        let end = self.id.char_indices().nth(8).map(|(i, _)| i).unwrap_or(self.id.len());
        &self.id[..end]
    }
}

/// Partial update for a task; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            is_completed: None,
        }
    }

    pub fn completed(done: bool) -> Self {
        Self {
            name: None,
            is_completed: Some(done),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_completed.is_none()
    }
}

/// A named, ordered collection of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// Generate a collision-resistant identifier (UUID v7, time ordered)
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Buy milk");
        assert_eq!(task.name, "Buy milk");
        assert!(!task.is_completed);
        assert_eq!(task.created_at, task.updated_at);
        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_new_ids_are_unique() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_apply_patch_keeps_id() {
        let mut task = Task::new("Draft");
        let id = task.id.clone();

        assert!(task.apply(&TaskPatch::completed(true)));
        assert!(task.is_completed);
        assert_eq!(task.name, "Draft");
        assert_eq!(task.id, id);

        assert!(task.apply(&TaskPatch::name("Final")));
        assert_eq!(task.name, "Final");
        assert!(task.is_completed);
    }

    #[test]
    fn test_apply_noop_patch() {
        let mut task = Task::new("Same");
        assert!(!task.apply(&TaskPatch::default()));
        assert!(!task.apply(&TaskPatch::name("Same")));
        assert!(!task.apply(&TaskPatch::completed(false)));
        assert!(TaskPatch::default().is_empty());
    }

    #[test]
    fn test_short_id() {
        let mut task = Task::new("x");
        assert_eq!(task.short_id().len(), 8);
        task.id = "abc".to_string();
        assert_eq!(task.short_id(), "abc");
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: "test-id".to_string(),
            name: "Walk dog".to_string(),
            is_completed: true,
            created_at: 1000,
            updated_at: 2000,
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"is_completed\":true"));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }

    #[test]
    fn test_task_list_position() {
        let mut list = TaskList::new("Today");
        list.tasks.push(Task::new("a"));
        list.tasks.push(Task::new("b"));
        let id = list.tasks[1].id.clone();

        assert_eq!(list.position(&id), Some(1));
        assert_eq!(list.position("missing"), None);
    }
}
