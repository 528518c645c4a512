//! Example 01: Basic Usage
//!
//! This example demonstrates adding, editing, toggling and deleting tasks
//! in a single TaskListStore.
//!
//! Run with: cargo run --example 01_basic_usage

use eyre::{Result, eyre};
use tasklist::{TaskListStore, TaskPatch};

fn main() -> Result<()> {
    println!("TaskList Basic Usage Example");
    println!("============================\n");

    let mut store = TaskListStore::new("Weekend");
    println!("Store created for list '{}'.\n", store.list_name());

    // ADD: type into the input box and submit
    println!("1. ADD - Submitting two tasks...");
    store.set_input("Buy milk");
    let milk = store.submit().ok_or_else(|| eyre!("submit was ignored"))?;
    let dog = store.add_task("Walk dog").ok_or_else(|| eyre!("add was ignored"))?;
    println!("   Added {} and {}", milk, dog);
    println!("   Input box after submit: {:?}\n", store.pending_input());

    // ADD: blank names are ignored
    println!("2. ADD - Submitting a blank name...");
    let ignored = store.add_task("   ");
    println!("   Result: {:?} (still {} tasks)\n", ignored, store.len());

    // EDIT: rename and complete
    println!("3. EDIT - Renaming and completing...");
    store.edit_task(&milk, &TaskPatch::name("Buy oat milk"));
    store.toggle_task(&dog);
    for task in store.tasks() {
        println!("   - [{}] {}", if task.is_completed { "x" } else { " " }, task.name);
    }
    println!("   {}\n", store.remaining_label());

    // EDIT: unknown ids are a silent no-op
    println!("4. EDIT - Unknown id...");
    let changed = store.edit_task("no-such-id", &TaskPatch::completed(true));
    println!("   Changed: {}\n", changed);

    // DELETE
    println!("5. DELETE - Removing the first task...");
    store.delete_task(&milk);
    println!("   Remaining tasks: {}", store.len());
    println!("   Task exists = {}\n", store.task(&milk).is_some());

    println!("Example complete!");
    Ok(())
}
