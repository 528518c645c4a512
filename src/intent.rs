// User intents forwarded from the presentational surface

use crate::store::TaskListStore;
use crate::workspace::Workspace;
use eyre::{Result, eyre};
use tracing::debug;

/// How a command names a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRef {
    /// 1-based position among the visible tasks
    Position(usize),
    /// Leading characters of the task id
    IdPrefix(String),
}

impl TaskRef {
    /// Parse a position (`2`) or an id prefix (`0199ab`, or `#01990123` for
    /// prefixes made only of digits)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(eyre!("Task reference cannot be empty"));
        }

        if let Some(prefix) = s.strip_prefix('#') {
            if prefix.is_empty() {
                return Err(eyre!("`#` must be followed by an id prefix"));
            }
            return Ok(TaskRef::IdPrefix(prefix.to_string()));
        }

        match s.parse::<usize>() {
            Ok(0) => Err(eyre!("Task positions start at 1")),
            Ok(n) => Ok(TaskRef::Position(n)),
            Err(_) => Ok(TaskRef::IdPrefix(s.to_string())),
        }
    }

    /// Find the id this reference points at
    ///
    /// Positions count visible tasks only, so they line up with what was
    /// rendered. An id prefix must match exactly one task.
    pub fn resolve(&self, store: &TaskListStore) -> Option<String> {
        match self {
            TaskRef::Position(n) => {
                let index = n.checked_sub(1)?;
                store.visible_tasks().get(index).map(|t| t.id.clone())
            }
            TaskRef::IdPrefix(prefix) => {
                let mut matches = store.tasks().iter().filter(|t| t.id.starts_with(prefix.as_str()));
                let first = matches.next()?;
                if matches.next().is_some() {
                    debug!(prefix = %prefix, "resolve: ambiguous id prefix");
                    return None;
                }
                Some(first.id.clone())
            }
        }
    }
}

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Type(String),
    Submit,
    Add(String),
    Toggle(TaskRef),
    Rename(TaskRef, String),
    Delete(TaskRef),
    Filter(String),
    ClearCompleted,
    NewList(String),
    SelectList(usize),
    Lists,
    Show,
    Help,
    Quit,
}

/// What the surface should do after an intent ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; redraw
    Changed,
    /// Nothing happened
    Unchanged,
    Show,
    Help,
    Lists,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <text>            add a task
  type <text>           put text in the input box
  submit                add the input box as a task
  toggle <n|id>         mark a task done / not done
  rename <n|id> <text>  change a task's name
  delete <n|id>         remove a task
                        (use #<id> for an id prefix made only of digits)
  filter <label>        All, Active or Completed
  clear                 remove completed tasks
  new <name>            create a list and switch to it
  select <n>            switch to list n
  lists                 show all lists
  show                  redraw the current list
  help                  this text
  quit                  leave";

impl Intent {
    /// Parse one command line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim_start()),
            None => (line, ""),
        };

        let intent = match command.to_ascii_lowercase().as_str() {
            "" => return Err(eyre!("Empty command")),
            "type" => Intent::Type(rest.to_string()),
            "submit" => Intent::Submit,
            "add" => Intent::Add(rest.to_string()),
            "toggle" | "done" => Intent::Toggle(TaskRef::parse(required(rest, "toggle")?)?),
            "rename" | "edit" => {
                let (target, name) = required(rest, "rename")?
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| eyre!("`rename` needs a task and a new name"))?;
                Intent::Rename(TaskRef::parse(target)?, required(name, "rename")?.trim_start().to_string())
            }
            "delete" | "rm" => Intent::Delete(TaskRef::parse(required(rest, "delete")?)?),
            "filter" => Intent::Filter(required(rest, "filter")?.to_string()),
            "clear" => Intent::ClearCompleted,
            "new" => Intent::NewList(required(rest, "new")?.to_string()),
            "select" => {
                let n: usize = required(rest, "select")?
                    .parse()
                    .map_err(|_| eyre!("List number must be a positive integer: {}", rest))?;
                if n == 0 {
                    return Err(eyre!("List numbers start at 1"));
                }
                Intent::SelectList(n)
            }
            "lists" => Intent::Lists,
            "show" | "ls" => Intent::Show,
            "help" | "?" => Intent::Help,
            "quit" | "exit" | "q" => Intent::Quit,
            other => return Err(eyre!("Unknown command: {} (try `help`)", other)),
        };

        Ok(intent)
    }

    /// Run this intent against the workspace
    ///
    /// Task intents act on the selected list. Intents that cannot apply
    /// (no list selected, unresolved reference, blank name) are no-ops.
    pub fn apply(&self, workspace: &mut Workspace) -> Outcome {
        match self {
            Intent::NewList(name) => {
                return match workspace.add_list(name.as_str()) {
                    Some(id) => {
                        workspace.select(&id);
                        Outcome::Changed
                    }
                    None => Outcome::Unchanged,
                };
            }
            Intent::SelectList(n) => {
                let id = n
                    .checked_sub(1)
                    .and_then(|i| workspace.lists().nth(i))
                    .map(|s| s.list_id().to_string());
                return match id {
                    Some(id) if workspace.select(&id) => Outcome::Changed,
                    _ => {
                        debug!(n, "select list: out of range");
                        Outcome::Unchanged
                    }
                };
            }
            Intent::Lists => return Outcome::Lists,
            Intent::Show => return Outcome::Show,
            Intent::Help => return Outcome::Help,
            Intent::Quit => return Outcome::Quit,
            _ => {}
        }

        let Some(store) = workspace.selected_mut() else {
            debug!(intent = ?self, "no list selected, ignoring");
            return Outcome::Unchanged;
        };

        let changed = match self {
            Intent::Type(text) => {
                store.set_input(text.as_str());
                true
            }
            Intent::Submit => store.submit().is_some(),
            Intent::Add(text) => store.add_task(text.as_str()).is_some(),
            Intent::Toggle(target) => target.resolve(store).is_some_and(|id| store.toggle_task(&id)),
            Intent::Rename(target, name) => target
                .resolve(store)
                .is_some_and(|id| store.rename_task(&id, name.as_str())),
            Intent::Delete(target) => target.resolve(store).is_some_and(|id| store.delete_task(&id)),
            Intent::Filter(label) => store.apply_filter_label(label),
            Intent::ClearCompleted => store.clear_completed() > 0,
            _ => false,
        };

        if changed { Outcome::Changed } else { Outcome::Unchanged }
    }
}

/// Counts from running a script of commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Commands parsed and applied
    pub commands: usize,
    /// Commands whose outcome was `Changed`
    pub changed: usize,
}

/// Apply each non-empty, non-`#` line of a script in order
///
/// Stops at the first parse error (reported with its line number) or at a
/// `quit` command.
pub fn replay(workspace: &mut Workspace, script: &str) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (line_num, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let intent = Intent::parse(line).map_err(|e| eyre!("line {}: {}", line_num + 1, e))?;
        summary.commands += 1;
        match intent.apply(workspace) {
            Outcome::Quit => break,
            Outcome::Changed => summary.changed += 1,
            Outcome::Unchanged => debug!(line = line_num + 1, ?intent, "replay: no effect"),
            _ => {}
        }
    }

    Ok(summary)
}

fn required<'a>(rest: &'a str, command: &str) -> Result<&'a str> {
    if rest.trim().is_empty() {
        return Err(eyre!("`{}` needs an argument", command));
    }
    Ok(rest)
}
