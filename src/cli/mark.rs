//! `ttr mark-in-progress` and `ttr mark-done` command implementations
//!
//! Both verbs share one status-mutation routine; any state may move to any
//! other, so marking a done task done again is a no-op apart from the
//! refreshed update timestamp.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::Store;
use crate::task::TaskStatus;

#[derive(Args)]
pub struct MarkArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(file: &Path, args: MarkArgs, status: TaskStatus) -> Result<()> {
    let store = Store::new(file);
    let mut tasks = store.load()?;

    for task in tasks.iter_mut().filter(|t| t.id == args.id) {
        task.status = status;
        task.touch();
    }

    store.save(&tasks)?;

    println!("✓ Marked task {} (ID: {})", status.label(), args.id);

    Ok(())
}
