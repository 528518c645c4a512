// Terminal and JSON views of a task list

use crate::filter::FilterMode;
use crate::store::TaskListStore;
use crate::workspace::Workspace;
use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use std::fmt;

/// Snapshot of everything the surface draws for one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub list_id: String,
    pub list_name: String,
    pub filter: FilterMode,
    pub input: String,
    pub tasks: Vec<TaskRow>,
    pub total: usize,
    pub remaining: usize,
    pub remaining_label: String,
}

/// One visible task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// 1-based, counted over visible tasks
    pub position: usize,
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub is_completed: bool,
}

impl View {
    pub fn from_store(store: &TaskListStore) -> Self {
        let tasks = store
            .visible_tasks()
            .into_iter()
            .enumerate()
            .map(|(i, t)| TaskRow {
                position: i + 1,
                id: t.id.clone(),
                short_id: t.short_id().to_string(),
                name: t.name.clone(),
                is_completed: t.is_completed,
            })
            .collect();

        Self {
            list_id: store.list_id().to_string(),
            list_name: store.list_name().to_string(),
            filter: store.filter(),
            input: store.pending_input().to_string(),
            tasks,
            total: store.len(),
            remaining: store.remaining_count(),
            remaining_label: store.remaining_label(),
        }
    }
}

const INPUT_PLACEHOLDER: &str = "What needs to be done today?";

/// Draw a list for the terminal
///
/// Colors follow `colored`'s global switch; the binary sets it from config.
pub fn render_text(view: &View) -> String {
    TextView(view).to_string()
}

struct TextView<'a>(&'a View);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "{}", view.list_name.bold().underline())?;

        if view.input.is_empty() {
            writeln!(f, "  + {}", INPUT_PLACEHOLDER.dimmed())?;
        } else {
            writeln!(f, "  + {}", view.input)?;
        }

        for row in &view.tasks {
            if row.is_completed {
                writeln!(
                    f,
                    "  {} {:>2}. {}  {}",
                    "[x]".green(),
                    row.position,
                    row.name.strikethrough().dimmed(),
                    row.short_id.dimmed()
                )?;
            } else {
                writeln!(f, "  [ ] {:>2}. {}  {}", row.position, row.name, row.short_id.dimmed())?;
            }
        }

        if view.tasks.is_empty() && view.total > 0 {
            let empty = format!("(no {} tasks)", view.filter.label().to_lowercase());
            writeln!(f, "  {}", empty.dimmed())?;
        }

        let filters: Vec<String> = FilterMode::ALL
            .iter()
            .map(|mode| {
                if *mode == view.filter {
                    mode.label().bold().cyan().to_string()
                } else {
                    mode.label().to_string()
                }
            })
            .collect();

        writeln!(
            f,
            "{}  |  {}  |  {}",
            view.remaining_label.yellow(),
            filters.join(" "),
            "Clear Completed".dimmed()
        )
    }
}

/// Pretty JSON for scripting
pub fn render_json(view: &View) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize view")
}

/// One line per list, the selected one marked
pub fn render_lists(workspace: &Workspace) -> String {
    ListsView(workspace).to_string()
}

struct ListsView<'a>(&'a Workspace);

impl fmt::Display for ListsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let workspace = self.0;
        if workspace.is_empty() {
            return writeln!(f, "(no lists)");
        }

        let selected = workspace.selected_id();
        for (i, store) in workspace.lists().enumerate() {
            let marker = if Some(store.list_id()) == selected { "*" } else { " " };
            writeln!(
                f,
                "{} {}. {} ({})",
                marker.cyan(),
                i + 1,
                store.list_name(),
                store.remaining_label()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TaskListStore {
        let mut store = TaskListStore::new("Groceries");
        let milk = store.add_task("Buy milk").unwrap();
        store.add_task("Buy eggs").unwrap();
        store.toggle_task(&milk);
        store
    }

    #[test]
    fn test_view_from_store() {
        let store = store();
        let view = View::from_store(&store);

        assert_eq!(view.list_name, "Groceries");
        assert_eq!(view.filter, FilterMode::All);
        assert_eq!(view.total, 2);
        assert_eq!(view.remaining, 1);
        assert_eq!(view.remaining_label, "1 task left");
        assert_eq!(view.tasks.len(), 2);
        assert_eq!(view.tasks[0].position, 1);
        assert!(view.tasks[0].is_completed);
        assert_eq!(view.tasks[1].name, "Buy eggs");
        assert_eq!(view.tasks[1].short_id, store.tasks()[1].short_id());
        assert_eq!(view.tasks[1].short_id.len(), 8);
    }

    #[test]
    fn test_view_positions_follow_filter() {
        let mut store = store();
        store.set_filter(FilterMode::Active);

        let view = View::from_store(&store);
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].position, 1);
        assert_eq!(view.tasks[0].name, "Buy eggs");
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_render_text_contents() {
        let view = View::from_store(&store());
        let text = render_text(&view);

        assert!(text.contains("Groceries"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Buy eggs"));
        assert!(text.contains("1 task left"));
        assert!(text.contains("Clear Completed"));
        assert!(text.contains(INPUT_PLACEHOLDER));
        assert!(text.contains(&view.tasks[0].short_id));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_text_empty_filter() {
        let mut store = TaskListStore::new("Chores");
        store.add_task("Sweep").unwrap();
        store.set_filter(FilterMode::Completed);

        let text = render_text(&View::from_store(&store));
        assert!(text.contains("(no completed tasks)"));
        assert!(!text.contains("Sweep"));
    }

    #[test]
    fn test_render_json() {
        let mut store = store();
        store.set_input("Buy bread");

        let json = render_json(&View::from_store(&store)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["list_name"], "Groceries");
        assert_eq!(value["filter"], "all");
        assert_eq!(value["input"], "Buy bread");
        assert_eq!(value["remaining"], 1);
        assert_eq!(value["tasks"].as_array().unwrap().len(), 2);
        assert_eq!(value["tasks"][0]["is_completed"], true);
    }

    #[test]
    fn test_render_lists() {
        let mut ws = Workspace::new();
        assert!(render_lists(&ws).contains("(no lists)"));

        ws.add_list("Home").unwrap();
        ws.add_list("Work").unwrap();
        let text = render_lists(&ws);

        assert!(text.contains("1. Home"));
        assert!(text.contains("2. Work"));
        assert!(text.contains("0 task left"));
    }
}
