//! Gitwrap - a thin layer over the system git executable
//!
//! Runs named git operations against a bound directory and decodes
//! `git status -z` output into typed change records.

pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod runner;
pub mod utils;

pub use error::{GitError, Result};

// Re-export commonly used types
pub use config::Config;
pub use git::{ChangeKind, ChangeRecord, Git, GitBuilder, Operation};
pub use runner::ProcessOutput;
