//! `ttr update` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::Store;

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    pub id: u32,

    /// New description
    pub description: String,
}

pub fn run(file: &Path, args: UpdateArgs) -> Result<()> {
    let store = Store::new(file);
    let mut tasks = store.load()?;

    // Ids are expected unique, so this touches at most one task. A missing
    // id is not an error: the save and the confirmation happen regardless.
    for task in tasks.iter_mut().filter(|t| t.id == args.id) {
        task.description = args.description.clone();
        task.touch();
    }

    store.save(&tasks)?;

    println!("✓ Updated task (ID: {})", args.id);

    Ok(())
}
