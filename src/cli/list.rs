//! `ttr list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::Store;
use crate::task::Task;

const TABLE_COL_ID: usize = 4;
const TABLE_COL_STATUS: usize = 12;
const TABLE_COL_DESC: usize = 40;

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (todo, in-progress, done)
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Filter tasks by their serialized status label. Exact, case-sensitive
/// comparison: an unrecognized filter matches nothing. An empty or absent
/// filter returns the full collection in stored order.
pub fn filter_tasks<'a>(tasks: &'a [Task], status: Option<&str>) -> Vec<&'a Task> {
    match status {
        None | Some("") => tasks.iter().collect(),
        Some(wanted) => tasks.iter().filter(|t| t.status.label() == wanted).collect(),
    }
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} UPDATED",
        "ID",
        "STATUS",
        "DESCRIPTION",
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESC
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_STATUS + TABLE_COL_DESC + 19)
    );
}

fn print_table_row(task: &Task) {
    let description = super::truncate(&task.description, TABLE_COL_DESC);
    println!(
        "{:<width_id$} {:<width_status$} {:<width_desc$} {}",
        task.id,
        task.status.label(),
        description,
        task.updated_at.format("%Y-%m-%d %H:%M"),
        width_id = TABLE_COL_ID,
        width_status = TABLE_COL_STATUS,
        width_desc = TABLE_COL_DESC
    );
}

pub fn run(file: &Path, args: ListArgs) -> Result<()> {
    let store = Store::new(file);
    let tasks = store.load()?;

    let filtered = filter_tasks(&tasks, args.status.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No tasks found");
        return Ok(());
    }

    print_table_header();
    for task in &filtered {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", filtered.len());

    Ok(())
}
