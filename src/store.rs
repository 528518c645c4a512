// In-memory task list state

use crate::filter::FilterMode;
use crate::models::{Task, TaskList, TaskPatch};
use eyre::{Result, eyre};
use std::collections::HashSet;
use tracing::debug;

/// A task list plus the transient UI state around it
///
/// Owns the list exclusively. Every operation is synchronous and total:
/// inputs that cannot apply (blank names, unknown ids, unknown filter labels)
/// leave the store unchanged and are reported through the return value.
#[derive(Debug, Clone)]
pub struct TaskListStore {
    list: TaskList,
    filter: FilterMode,
    pending_input: String,
}

impl TaskListStore {
    /// Create a store around a new, empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self::wrap(TaskList::new(name))
    }

    /// Wrap an existing list; the filter starts at `All`
    ///
    /// Rejects lists with a blank id or with blank or duplicate task ids.
    pub fn from_list(list: TaskList) -> Result<Self> {
        Self::validate_list(&list)?;
        Ok(Self::wrap(list))
    }

    fn wrap(list: TaskList) -> Self {
        Self {
            list,
            filter: FilterMode::default(),
            pending_input: String::new(),
        }
    }

    fn validate_list(list: &TaskList) -> Result<()> {
        if list.id.trim().is_empty() {
            return Err(eyre!("List ID cannot be empty or whitespace-only"));
        }

        let mut seen = HashSet::new();
        for task in &list.tasks {
            if task.id.trim().is_empty() {
                return Err(eyre!("Task ID cannot be empty or whitespace-only (list {})", list.id));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(eyre!("Duplicate task ID {} in list {}", task.id, list.id));
            }
        }
        Ok(())
    }

    /// Hand the list back, dropping the UI state
    pub fn into_list(self) -> TaskList {
        self.list
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn list_id(&self) -> &str {
        &self.list.id
    }

    pub fn list_name(&self) -> &str {
        &self.list.name
    }

    pub fn set_list_name(&mut self, name: impl Into<String>) {
        self.list.name = name.into();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.list.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.list.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.list.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.tasks.is_empty()
    }

    // ========================================================================
    // Input box
    // ========================================================================

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Add a task from the pending input
    pub fn submit(&mut self) -> Option<String> {
        let name = self.pending_input.clone();
        self.add_task(name)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new open task
    ///
    /// Blank names are ignored and the pending input is kept. On success the
    /// pending input is cleared and the new id returned.
    pub fn add_task(&mut self, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        if name.trim().is_empty() {
            debug!(list = %self.list.id, "add_task: blank name ignored");
            return None;
        }

        let task = Task::new(name);
        let id = task.id.clone();
        debug!(list = %self.list.id, id = %id, "add_task: appended");

        self.list.tasks.push(task);
        self.pending_input.clear();
        Some(id)
    }

    /// Merge a patch into the task with this id, in place
    pub fn edit_task(&mut self, id: &str, patch: &TaskPatch) -> bool {
        if patch.is_empty() {
            debug!(list = %self.list.id, id, "edit_task: empty patch");
            return false;
        }

        let Some(pos) = self.list.position(id) else {
            debug!(list = %self.list.id, id, "edit_task: unknown id");
            return false;
        };

        let changed = self.list.tasks[pos].apply(patch);
        debug!(list = %self.list.id, id, changed, "edit_task: applied");
        changed
    }

    /// Flip the completion flag of one task
    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.task(id).map(|t| t.is_completed) {
            Some(done) => self.edit_task(id, &TaskPatch::completed(!done)),
            None => {
                debug!(list = %self.list.id, id, "toggle_task: unknown id");
                false
            }
        }
    }

    pub fn rename_task(&mut self, id: &str, name: impl Into<String>) -> bool {
        self.edit_task(id, &TaskPatch::name(name))
    }

    /// Remove the task with this id, if present
    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = match self.list.position(id) {
            Some(pos) => {
                self.list.tasks.remove(pos);
                true
            }
            None => false,
        };

        debug!(list = %self.list.id, id, removed, "delete_task");
        removed
    }

    /// Remove every completed task, keeping the order of the rest
    ///
    /// Returns the number of tasks removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.list.tasks.len();
        self.list.tasks.retain(|t| !t.is_completed);

        let removed = before - self.list.tasks.len();
        debug!(list = %self.list.id, removed, "clear_completed");
        removed
    }

    // ========================================================================
    // Filtering and derived state
    // ========================================================================

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        debug!(list = %self.list.id, filter = %mode, "set_filter");
        self.filter = mode;
    }

    /// Set the filter from a filter bar label; unknown labels are ignored
    pub fn apply_filter_label(&mut self, label: &str) -> bool {
        match FilterMode::from_label(label) {
            Some(mode) => {
                self.set_filter(mode);
                true
            }
            None => {
                debug!(list = %self.list.id, label, "apply_filter_label: unknown label");
                false
            }
        }
    }

    /// Tasks matching the current filter, in list order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.list.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// Number of tasks not yet completed
    pub fn remaining_count(&self) -> usize {
        self.list.tasks.iter().filter(|t| !t.is_completed).count()
    }

    /// Footer text, e.g. "2 tasks left"
    pub fn remaining_label(&self) -> String {
        let n = self.remaining_count();
        let noun = if n > 1 { "tasks" } else { "task" };
        format!("{} {} left", n, noun)
    }
}
