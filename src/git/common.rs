//! Common git utilities and shared helpers

use colored::*;
use std::path::Path;

/// Logger for git operations with consistent formatting
///
/// Each line is prefixed with the repository path in cyan/bold. Output goes
/// to stderr so that stdout carries only what git itself printed.
///
/// ## Example
///
/// ```rust,no_run
/// use gitwrap::git::Logger;
/// use std::path::Path;
///
/// let logger = Logger::default();
/// logger.info(Path::new("/tmp/repo"), "Starting operation");
/// logger.success(Path::new("/tmp/repo"), "Operation completed");
/// ```
#[derive(Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, repo: &Path, msg: &str) {
        eprintln!("{} | {}", repo.display().to_string().cyan().bold(), msg);
    }

    pub fn success(&self, repo: &Path, msg: &str) {
        eprintln!(
            "{} | {}",
            repo.display().to_string().cyan().bold(),
            msg.green()
        );
    }

    pub fn warn(&self, repo: &Path, msg: &str) {
        eprintln!(
            "{} | {}",
            repo.display().to_string().cyan().bold(),
            msg.yellow()
        );
    }

    pub fn error(&self, repo: &Path, msg: &str) {
        eprintln!("{} | {}", repo.display().to_string().cyan().bold(), msg.red());
    }
}
