//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;

// Re-export commonly used functions
pub use exit_codes::get_exit_code_description;
pub use filesystem::{Dir, ensure_directory, remove_tree_if_exists};
