//! Task management module
//!
//! This module provides the task data model:
//! - Task record with creation/update timestamps
//! - Task state machine (todo -> in-progress -> done, no transition guards)
//! - Id assignment rule for new tasks

pub mod model;

pub use model::{next_id, Task, TaskStatus};
