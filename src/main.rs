//! Task Tracker - command-line task tracker backed by a local JSON file

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_tracker::cli::{self, Cli, Commands};
use task_tracker::task::TaskStatus;

fn main() -> Result<()> {
    if std::env::var("TTR_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_tracker=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "ttr", &mut std::io::stdout());
            Ok(())
        }
        Commands::Add(args) => cli::add::run(&cli.file, args),
        Commands::Update(args) => cli::update::run(&cli.file, args),
        Commands::Delete(args) => cli::delete::run(&cli.file, args),
        Commands::MarkInProgress(args) => cli::mark::run(&cli.file, args, TaskStatus::InProgress),
        Commands::MarkDone(args) => cli::mark::run(&cli.file, args, TaskStatus::Done),
        Commands::List(args) => cli::list::run(&cli.file, args),
    }
}
