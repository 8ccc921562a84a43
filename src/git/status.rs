//! Decoding of `git status -z` output
//!
//! Each NUL-separated record starts with two state letters, the index state
//! and the working tree state, followed by a space and the path. Renames and
//! copies are followed by one extra segment holding the second path.
//!
//! The path starts after the first space at or after byte 2. This tolerates
//! formats that put extra characters between the state letters and the path,
//! but it mis-parses paths that themselves begin with a space.

use super::operation::Operation;
use super::repository::Git;
use crate::constants;
use crate::error::{GitError, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// Kind of change reported for one side of a status record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Delete,
    Modify,
    Add,
    Rename,
    Copy,
    Unmerged,
    Untracked,
    TypeChange,
}

impl ChangeKind {
    /// Decode one state letter; a space means "unchanged"
    pub fn from_code(code: u8) -> Option<Option<ChangeKind>> {
        let kind = match code {
            b'D' => ChangeKind::Delete,
            b'M' => ChangeKind::Modify,
            b'A' => ChangeKind::Add,
            b'R' => ChangeKind::Rename,
            b'C' => ChangeKind::Copy,
            b'U' => ChangeKind::Unmerged,
            b'?' => ChangeKind::Untracked,
            b'T' => ChangeKind::TypeChange,
            b' ' => return Some(None),
            _ => return None,
        };
        Some(Some(kind))
    }

    pub fn code(self) -> char {
        match self {
            ChangeKind::Delete => 'D',
            ChangeKind::Modify => 'M',
            ChangeKind::Add => 'A',
            ChangeKind::Rename => 'R',
            ChangeKind::Copy => 'C',
            ChangeKind::Unmerged => 'U',
            ChangeKind::Untracked => '?',
            ChangeKind::TypeChange => 'T',
        }
    }

    /// Whether a record of this kind is followed by a second path segment
    pub fn consumes_destination(self) -> bool {
        matches!(self, ChangeKind::Rename | ChangeKind::Copy)
    }

    fn name(self) -> &'static str {
        match self {
            ChangeKind::Delete => "delete",
            ChangeKind::Modify => "modify",
            ChangeKind::Add => "add",
            ChangeKind::Rename => "rename",
            ChangeKind::Copy => "copy",
            ChangeKind::Unmerged => "unmerged",
            ChangeKind::Untracked => "untracked",
            ChangeKind::TypeChange => "type_change",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reported change between the working tree, the index and HEAD
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub source_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_path: Option<String>,
    pub index_state: Option<ChangeKind>,
    pub tree_state: Option<ChangeKind>,
}

impl ChangeRecord {
    pub fn is_clean(&self) -> bool {
        self.index_state.is_none() && self.tree_state.is_none()
    }

    pub fn is_tree_clean(&self) -> bool {
        self.tree_state.is_none()
    }

    pub fn is_rename(&self) -> bool {
        [self.index_state, self.tree_state]
            .into_iter()
            .flatten()
            .any(ChangeKind::consumes_destination)
    }
}

fn kind_or_none(kind: Option<ChangeKind>) -> String {
    kind.map_or_else(|| "None".to_string(), |k| k.to_string())
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = kind_or_none(self.tree_state);
        let idx = kind_or_none(self.index_state);
        match &self.destination_path {
            Some(dst) => write!(f, "{} -> {}({}, {})", self.source_path, dst, tree, idx),
            None => write!(f, "{}({}, {})", self.source_path, tree, idx),
        }
    }
}

fn decode_state(segment: &[u8], code: u8) -> Result<Option<ChangeKind>> {
    ChangeKind::from_code(code).ok_or_else(|| {
        GitError::malformed(segment, format!("unknown state code '{}'", code as char))
    })
}

fn decode_path(segment: &[u8], path: &[u8]) -> Result<String> {
    std::str::from_utf8(path)
        .map(str::to_string)
        .map_err(|_| GitError::malformed(segment, "path is not valid UTF-8"))
}

fn parse_header(segment: &[u8]) -> Result<ChangeRecord> {
    if segment.len() < 3 {
        return Err(GitError::malformed(segment, "need 'XY path'"));
    }
    let index_state = decode_state(segment, segment[0])?;
    let tree_state = decode_state(segment, segment[1])?;

    let space = segment[2..]
        .iter()
        .position(|&b| b == b' ')
        .map(|pos| pos + 2)
        .ok_or_else(|| GitError::malformed(segment, "no space before path"))?;
    let path = &segment[space + 1..];
    if path.is_empty() {
        return Err(GitError::malformed(segment, "missing path"));
    }

    Ok(ChangeRecord {
        source_path: decode_path(segment, path)?,
        destination_path: None,
        index_state,
        tree_state,
    })
}

/// Decode raw `status -z` output into change records, in the order git
/// reported them
pub fn parse_status(raw: &[u8]) -> Result<Vec<ChangeRecord>> {
    let segments: Vec<&[u8]> = raw.split(|&b| b == 0).filter(|s| !s.is_empty()).collect();

    let mut records = Vec::with_capacity(segments.len());
    let mut cursor = 0;
    while cursor < segments.len() {
        let segment = segments[cursor];
        cursor += 1;

        let mut record = parse_header(segment)?;
        if record.is_rename() {
            let dst = segments
                .get(cursor)
                .ok_or_else(|| GitError::malformed(segment, "no destination after rename or copy"))?;
            cursor += 1;
            record.destination_path = Some(decode_path(dst, dst)?);
        }
        records.push(record);
    }
    Ok(records)
}

/// Query `git status -z`, optionally limited to `filter`, and decode it
///
/// An empty filter is treated as no filter.
pub fn status(git: &Git, filter: Option<&Path>) -> Result<Vec<ChangeRecord>> {
    let mut args: Vec<&OsStr> = vec![OsStr::new(constants::git::STATUS_NUL_FLAG)];
    if let Some(path) = filter.filter(|p| !p.as_os_str().is_empty()) {
        args.push(OsStr::new(constants::git::PATHSPEC_SEPARATOR));
        args.push(path.as_os_str());
    }

    let output = git.run(Operation::Status, args)?;
    if !output.success() {
        return Err(GitError::StatusFailed {
            code: output.code,
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
        });
    }
    parse_status(&output.stdout)
}
