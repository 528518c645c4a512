use clap::{Parser, Subcommand};
use eyre::{Context, Result, eyre};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tasklist::intent::{HELP, replay};
use tasklist::render::{render_json, render_lists, render_text};
use tasklist::{Config, Intent, Outcome, View, Workspace};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - a todo list with filters, driven from the terminal")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasklist/config.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the first list (overrides the config file)
    #[arg(short, long)]
    name: Option<String>,

    /// Print views as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin interactively (default)
    Session,

    /// Run the commands in a script file, then print the final view
    Replay {
        /// File with one command per line; blank lines and # comments are skipped
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Setup tracing; stdout is reserved for the rendered list
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(name) = cli.name {
        config.list_name = name;
    }
    if cli.no_color {
        config.color = false;
    }
    colored::control::set_override(config.color);

    let mut workspace = Workspace::new();
    workspace
        .add_list(config.list_name.as_str())
        .ok_or_else(|| eyre!("List name cannot be empty"))?;
    if let Some(store) = workspace.selected_mut() {
        store.set_filter(config.default_filter);
    }
    info!(list = %config.list_name, filter = %config.default_filter, "Workspace ready");

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(&mut workspace, &config, cli.json),
        Commands::Replay { file } => run_replay(&mut workspace, &file, cli.json),
    }
}

fn run_session(workspace: &mut Workspace, config: &Config, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_view(workspace, json)?;

    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            writeln!(stdout)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let intent = match Intent::parse(&line) {
            Ok(intent) => intent,
            Err(e) => {
                eprintln!("Error: {}", e);
                continue;
            }
        };

        match intent.apply(workspace) {
            Outcome::Changed | Outcome::Show => print_view(workspace, json)?,
            Outcome::Unchanged => debug!(?intent, "No effect"),
            Outcome::Lists => print!("{}", render_lists(workspace)),
            Outcome::Help => println!("{}", HELP),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn run_replay(workspace: &mut Workspace, file: &Path, json: bool) -> Result<()> {
    let script = fs::read_to_string(file).context(format!("Failed to read script {}", file.display()))?;

    let summary = replay(workspace, &script).context(format!("Failed to replay {}", file.display()))?;

    info!(file = ?file, commands = summary.commands, changed = summary.changed, "Replay complete");
    print_view(workspace, json)
}

fn print_view(workspace: &Workspace, json: bool) -> Result<()> {
    let Some(store) = workspace.selected() else {
        println!("(no list selected)");
        return Ok(());
    };

    let view = View::from_store(store);
    if json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
