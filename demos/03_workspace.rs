//! Example 03: Workspace and Intents
//!
//! This example demonstrates several lists in one Workspace, driven by the
//! same text commands the `tasklist` binary accepts.
//!
//! Run with: cargo run --example 03_workspace

use eyre::Result;
use tasklist::render::{render_json, render_lists, render_text};
use tasklist::{Intent, View, Workspace};

fn main() -> Result<()> {
    println!("TaskList Workspace Example");
    println!("==========================\n");

    let mut workspace = Workspace::new();
    workspace.add_list("Home");

    let script = [
        "add Water plants",
        "add Take out trash",
        "toggle 1",
        "new Work",
        "add Send report",
        "add Book meeting room",
        "filter active",
        "select 1",
    ];

    for line in script {
        let outcome = Intent::parse(line)?.apply(&mut workspace);
        println!("  {:<24} -> {:?}", line, outcome);
    }
    println!();

    println!("Lists:");
    print!("{}", render_lists(&workspace));
    println!();

    if let Some(store) = workspace.selected() {
        let view = View::from_store(store);
        print!("{}", render_text(&view));
        println!();
        println!("{}", render_json(&view)?);
    }

    println!("\nExample complete!");
    Ok(())
}
