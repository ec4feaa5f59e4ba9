//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::{add::AddArgs, delete::DeleteArgs, list::ListArgs, mark::MarkArgs, update::UpdateArgs};

#[derive(Parser)]
#[command(
    name = "ttr",
    version,
    about = "Command-line task tracker backed by a local JSON file"
)]
pub struct Cli {
    /// Path to the task file
    #[arg(long, global = true, env = "TTR_FILE", default_value = "tasks.json")]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Update a task's description
    Update(UpdateArgs),

    /// Delete a task
    Delete(DeleteArgs),

    /// Mark a task as in-progress
    MarkInProgress(MarkArgs),

    /// Mark a task as done
    MarkDone(MarkArgs),

    /// List tasks
    List(ListArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
