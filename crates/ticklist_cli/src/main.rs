//! Command-line shell for the ticklist core.
//!
//! # Responsibility
//! - Parse arguments, dispatch to the repository, format output.
//! - Map not-found results to a non-zero exit status for scripts.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use ticklist_core::{
    default_log_level, init_logging, JsonTodoRepository, RepoError, Todo, TodoRepository,
    DEFAULT_STORE_FILE,
};

/// A simple command-line todo manager.
#[derive(Parser)]
#[command(name = "ticklist", version, about, long_about = None)]
struct Cli {
    /// Path to the todo store file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_STORE_FILE)]
    file: PathBuf,

    /// Absolute directory for rolling log files; logging stays off without it
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new todo
    Add {
        /// Todo description
        title: String,
    },
    /// List todos
    List {
        /// Filter todos by status
        #[arg(long, value_enum, value_name = "STATUS")]
        filter: Option<StatusFilter>,
    },
    /// Mark a todo as completed
    Complete {
        /// Todo ID
        id: u64,
    },
    /// Remove a todo
    Remove {
        /// Todo ID
        id: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusFilter {
    Done,
    Pending,
}

fn format_todo(todo: &Todo) -> String {
    let checkbox = if todo.done { "✓" } else { " " };
    format!("[{checkbox}] {}. {}", todo.id, todo.title)
}

fn run(cli: &Cli) -> Result<ExitCode, RepoError> {
    let repo = JsonTodoRepository::open(cli.file.as_path())?;

    match &cli.command {
        Commands::Add { title } => {
            let todo = repo.add(title)?;
            println!("Added todo: {} (ID: {})", todo.title, todo.id);
        }
        Commands::List { filter } => {
            let mut todos = repo.load_all()?;
            match filter {
                Some(StatusFilter::Done) => todos.retain(|todo| todo.done),
                Some(StatusFilter::Pending) => todos.retain(Todo::is_pending),
                None => {}
            }

            if todos.is_empty() {
                println!("No todos found.");
            } else {
                println!("Total: {} todo(s)", todos.len());
                println!();
                for todo in &todos {
                    println!("{}", format_todo(todo));
                }
            }
        }
        Commands::Complete { id } => {
            if repo.complete(*id)? {
                println!("Marked todo {id} as completed.");
            } else {
                eprintln!("Error: Todo {id} not found.");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Remove { id } => {
            if repo.remove(*id)? {
                println!("Removed todo {id}.");
            } else {
                eprintln!("Error: Todo {id} not found.");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        // Logging is best-effort; a bad --log-dir must not block the command.
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("Warning: {err}");
        }
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
