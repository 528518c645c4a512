// TaskList - In-memory todo list with filtering, plus a terminal front end

pub mod config;
pub mod filter;
pub mod intent;
pub mod models;
pub mod render;
pub mod store;
pub mod workspace;

// Re-export main types for convenience
pub use config::Config;
pub use filter::FilterMode;
pub use intent::{Intent, Outcome, ReplaySummary, TaskRef};
pub use models::{Task, TaskList, TaskPatch, new_id, now_ms};
pub use render::View;
pub use store::TaskListStore;
pub use workspace::Workspace;
