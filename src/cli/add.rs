//! `ttr add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::Store;
use crate::task::{next_id, Task};

#[derive(Args)]
pub struct AddArgs {
    /// What needs doing
    pub description: String,
}

pub fn run(file: &Path, args: AddArgs) -> Result<()> {
    let store = Store::new(file);
    let mut tasks = store.load()?;

    let id = next_id(&tasks);
    tasks.push(Task::new(id, args.description.clone()));
    store.save(&tasks)?;

    println!("✓ Added task: {}", args.description);
    println!("  ID:     {}", id);
    println!("  Status: todo");
    println!("  File:   {}", file.display());

    Ok(())
}
