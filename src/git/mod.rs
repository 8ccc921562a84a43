//! Git operations using the system git executable
//!
//! ## Sub-modules
//!
//! - [`operation`]: The closed table of named git operations
//! - [`repository`]: [`Git`], a directory bound to those operations
//!   - `exists()` - Whether a healthy repository lives at the path
//!   - `storage()` - Path of the `.git` directory
//!   - `init_if_new()` - Initialize unless a repository is already there
//! - [`status`]: Decoding of `git status -z` into [`ChangeRecord`]s
//! - [`exclude`]: [`Exclude`], local ignore patterns in `.git/info/exclude`
//! - [`builder`]: [`GitBuilder`] for handles with a non-default program
//! - [`common`]: Shared helpers
//!   - `Logger` - Consistent logging for git operations

pub mod builder;
pub mod common;
pub mod exclude;
pub mod operation;
pub mod repository;
pub mod status;

pub use builder::GitBuilder;
pub use common::Logger;
pub use exclude::Exclude;
pub use operation::Operation;
pub use repository::Git;
pub use status::{ChangeKind, ChangeRecord, parse_status, status};
