//! Command-line view layer for the todo list.
//!
//! # Responsibility
//! - Translate CLI input into controller operations and re-render the
//!   application state after each one.
//! - Keep all domain behavior inside `ticklist_core`; this binary only
//!   binds, renders, and reports bootstrap failures.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use ticklist_core::db::{open_db, STORE_FILE_NAME};
use ticklist_core::{default_log_level, init_logging, App, SqliteTodoRepository, TodoId, TodoRepository};

mod render;

/// Ticklist - a local todo list.
#[derive(Parser)]
#[command(name = "ticklist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the todo store file.
    #[arg(long, env = "TICKLIST_DB", default_value = STORE_FILE_NAME)]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "TICKLIST_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "TICKLIST_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Add a new todo; blank input is silently ignored.
    Add {
        /// Title words, joined with spaces.
        title: Vec<String>,
    },
    /// Show the list through a filter fragment (all|active|completed).
    List {
        /// Filter fragment; empty or unknown behaves as `all`.
        fragment: Option<String>,
    },
    /// Flip one item's completion state.
    Toggle {
        /// Item position as printed by `list`.
        position: usize,
    },
    /// Replace one item's title; committing an empty title deletes it.
    Edit {
        /// Item position as printed by `list`.
        position: usize,
        /// New title words; none means an empty commit.
        title: Vec<String>,
    },
    /// Delete one item.
    Destroy {
        /// Item position as printed by `list`.
        position: usize,
    },
    /// Set every item to the opposite of the current all-completed state.
    ToggleAll,
    /// Delete every completed item.
    ClearCompleted,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        init_logging(&level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open todo store at `{}`", cli.db.display()))?;
    let repo = SqliteTodoRepository::try_new(&conn).context("todo store is not usable")?;
    let mut app = App::new(repo);
    app.start().context("failed to load todos")?;

    match cli.command {
        Command::Add { title } => {
            app.commit_new(&title.join(" "));
        }
        Command::List { fragment } => {
            app.navigate(fragment.as_deref().unwrap_or(""));
        }
        Command::Toggle { position } => {
            let id = resolve_position(&app, position)?;
            app.toggle(id);
        }
        Command::Edit { position, title } => {
            let id = resolve_position(&app, position)?;
            app.commit_edit(id, &title.join(" "));
        }
        Command::Destroy { position } => {
            let id = resolve_position(&app, position)?;
            app.destroy(id);
        }
        Command::ToggleAll => {
            let target = !app.counts().all_completed();
            app.toggle_all(target);
        }
        Command::ClearCompleted => app.clear_completed(),
    }

    info!(
        "event=cli_command module=cli status=ok todos={} core_version={}",
        app.list().len(),
        ticklist_core::core_version()
    );

    if app.take_dirty() {
        print!("{}", render::render_app(&app));
    }

    Ok(())
}

/// Maps a printed list position to the stable id behind it.
///
/// Positions index the full ordered list, not the filtered view, so a handle
/// stays valid while the user switches filters.
fn resolve_position<R: TodoRepository>(app: &App<R>, position: usize) -> Result<TodoId> {
    let index = position
        .checked_sub(1)
        .ok_or_else(|| anyhow!("positions start at 1"))?;
    app.list()
        .todos()
        .get(index)
        .map(|todo| todo.id)
        .ok_or_else(|| anyhow!("no todo at position {position}"))
}
