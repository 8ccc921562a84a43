//! Central constants for the gitwrap library

/// Default values for git invocation
pub mod git {
    /// Executable invoked when no program is configured
    pub const DEFAULT_PROGRAM: &str = "git";

    /// Name of the directory where git keeps its own metadata
    pub const STORAGE_DIR: &str = ".git";

    /// Flag switching `git status` into null-terminated porcelain output
    pub const STATUS_NUL_FLAG: &str = "-z";

    /// Separator between options and pathspecs
    pub const PATHSPEC_SEPARATOR: &str = "--";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gitwrap.yaml";
}
