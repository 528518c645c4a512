// Several named task lists with one selected

use crate::models::TaskList;
use crate::store::TaskListStore;
use eyre::{Result, eyre};
use tracing::debug;

/// Owner of every task list in a session
///
/// Lists keep insertion order. At most one list is selected; the selection is
/// always a list that exists.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    lists: Vec<TaskListStore>,
    selected: Option<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty list
    ///
    /// Blank names are ignored. The first list added becomes the selection.
    pub fn add_list(&mut self, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        if name.trim().is_empty() {
            debug!("add_list: blank name ignored");
            return None;
        }
        Some(self.push(TaskListStore::new(name)))
    }

    /// Take ownership of an existing list
    ///
    /// Rejects a list whose id is already in the workspace, or whose tasks
    /// fail `TaskListStore::from_list` validation.
    pub fn insert(&mut self, list: TaskList) -> Result<String> {
        if self.position(&list.id).is_some() {
            return Err(eyre!("Duplicate list ID {}", list.id));
        }
        let store = TaskListStore::from_list(list)?;
        Ok(self.push(store))
    }

    fn push(&mut self, store: TaskListStore) -> String {
        let id = store.list_id().to_string();
        debug!(id = %id, name = %store.list_name(), "insert list");

        self.lists.push(store);
        if self.selected.is_none() {
            self.selected = Some(id.clone());
        }
        id
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.position(id).is_none() {
            debug!(id, "select: unknown list");
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected(&self) -> Option<&TaskListStore> {
        let id = self.selected.as_deref()?;
        self.lists.iter().find(|s| s.list_id() == id)
    }

    pub fn selected_mut(&mut self) -> Option<&mut TaskListStore> {
        let id = self.selected.as_deref()?;
        self.lists.iter_mut().find(|s| s.list_id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&TaskListStore> {
        self.lists.iter().find(|s| s.list_id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut TaskListStore> {
        self.lists.iter_mut().find(|s| s.list_id() == id)
    }

    pub fn rename_list(&mut self, id: &str, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(store) => {
                store.set_list_name(name);
                true
            }
            None => false,
        }
    }

    /// Remove a list; the selection moves to the first remaining list
    pub fn delete_list(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            debug!(id, "delete_list: unknown list");
            return false;
        };

        self.lists.remove(pos);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.lists.first().map(|s| s.list_id().to_string());
        }
        true
    }

    pub fn lists(&self) -> impl Iterator<Item = &TaskListStore> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.lists.iter().position(|s| s.list_id() == id)
    }
}
