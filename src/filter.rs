// Display filtering for task lists

use crate::models::Task;
use serde::{Deserialize, Serialize};

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,    // !is_completed
    Completed, // is_completed
}

impl FilterMode {
    /// Every mode, in filter bar order
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Whether a task is shown under this mode
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.is_completed,
            FilterMode::Completed => task.is_completed,
        }
    }

    /// Label shown in the filter bar
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Map a clicked filter bar label to a mode
    ///
    /// Case-insensitive, surrounding whitespace ignored. Anything that is not
    /// one of the three labels yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        FilterMode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for FilterMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterMode::from_label(s)
            .ok_or_else(|| eyre::eyre!("Unknown filter: {} (expected All, Active or Completed)", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(done: bool) -> Task {
        let mut task = Task::new("t");
        task.is_completed = done;
        task
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }

    #[test]
    fn test_matches() {
        let open = task(false);
        let done = task(true);

        assert!(FilterMode::All.matches(&open));
        assert!(FilterMode::All.matches(&done));
        assert!(FilterMode::Active.matches(&open));
        assert!(!FilterMode::Active.matches(&done));
        assert!(!FilterMode::Completed.matches(&open));
        assert!(FilterMode::Completed.matches(&done));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(FilterMode::from_label("All"), Some(FilterMode::All));
        assert_eq!(FilterMode::from_label(" active "), Some(FilterMode::Active));
        assert_eq!(FilterMode::from_label("COMPLETED"), Some(FilterMode::Completed));
        assert_eq!(FilterMode::from_label("Clear Completed"), None);
        assert_eq!(FilterMode::from_label(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert!("done".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterMode::All.to_string(), "All");
        assert_eq!(FilterMode::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FilterMode::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let mode: FilterMode = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(mode, FilterMode::Completed);
    }
}
