//! Example 02: Filtering
//!
//! This example demonstrates the All / Active / Completed filters and
//! clearing completed tasks.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use tasklist::{FilterMode, TaskListStore};

fn main() -> Result<()> {
    println!("TaskList Filtering Example");
    println!("==========================\n");

    let mut store = TaskListStore::new("Release");

    // Create sample tasks
    println!("Creating sample tasks...\n");
    let titles = [
        ("Write documentation", false),
        ("Fix critical bug", true),
        ("Code review", false),
        ("Update tests", true),
        ("Deploy to staging", false),
    ];

    for (title, done) in titles {
        if let Some(id) = store.add_task(title) {
            if done {
                store.toggle_task(&id);
            }
            println!("  Created: {} (completed={})", title, done);
        }
    }
    println!();

    for (i, mode) in FilterMode::ALL.into_iter().enumerate() {
        println!("{}. Filter = {}:", i + 1, mode);
        store.set_filter(mode);
        let visible = store.visible_tasks();
        for task in &visible {
            println!("   - {}", task.name);
        }
        println!("   Showing: {} of {} tasks\n", visible.len(), store.len());
    }

    // Filter labels as clicked in the footer
    println!("4. Clicking the 'Active' label, then an unknown one:");
    store.apply_filter_label("Active");
    store.apply_filter_label("Someday");
    println!("   Filter is now: {}\n", store.filter());

    // Clear completed
    println!("5. Clear completed:");
    let removed = store.clear_completed();
    println!("   Removed: {} tasks", removed);
    println!("   {}\n", store.remaining_label());

    println!("Example complete!");
    Ok(())
}
