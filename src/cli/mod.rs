//! Command-line workflow, kept separate from argument parsing so it can be
//! driven programmatically.

pub mod orchestration;

pub use orchestration::{run_bump, BumpOutcome, BumpWorkflowArgs};
