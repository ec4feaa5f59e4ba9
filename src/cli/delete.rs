//! `ttr delete` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::store::Store;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: u32,
}

pub fn run(file: &Path, args: DeleteArgs) -> Result<()> {
    let store = Store::new(file);
    let mut tasks = store.load()?;

    // Removes every match; a missing id leaves the collection unchanged
    // and still reports success.
    tasks.retain(|t| t.id != args.id);

    store.save(&tasks)?;

    println!("✓ Deleted task (ID: {})", args.id);

    Ok(())
}
