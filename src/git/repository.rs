//! A directory bound to the named git operations
//!
//! Every call is independent: the handle holds nothing but the path and the
//! program to invoke, and each method spawns one git process in that path.

use super::common::Logger;
use super::exclude::Exclude;
use super::operation::Operation;
use crate::constants;
use crate::error::{GitError, Result};
use crate::runner::{self, ProcessOutput};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Git {
    path: PathBuf,
    program: String,
}

impl Git {
    /// Bind `path` to the default `git` executable
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_program(path, constants::git::DEFAULT_PROGRAM)
    }

    pub fn with_program(path: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            program: program.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run a named operation, prepending its subcommand to `args`
    pub fn run<I, S>(&self, op: Operation, args: I) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.execute(op.subcommand(), args)
    }

    /// Run any git subcommand, named or not
    pub fn execute<I, S>(&self, cmd: &str, args: I) -> Result<ProcessOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let argv: Vec<OsString> = std::iter::once(OsStr::new(cmd).to_os_string())
            .chain(args.into_iter().map(|a| a.as_ref().to_os_string()))
            .collect();
        runner::run(&self.path, &self.program, argv)
    }

    pub fn status(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Status, args)
    }

    pub fn commit(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Commit, args)
    }

    pub fn add(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Add, args)
    }

    pub fn init(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Init, args)
    }

    pub fn branch(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Branch, args)
    }

    pub fn tag(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Tag, args)
    }

    pub fn rm(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Rm, args)
    }

    pub fn hash_object(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::HashObject, args)
    }

    pub fn checkout(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Checkout, args)
    }

    pub fn reset(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Reset, args)
    }

    pub fn clean(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Clean, args)
    }

    pub fn config(&self, args: &[&str]) -> Result<ProcessOutput> {
        self.run(Operation::Config, args)
    }

    /// True iff the path is a directory and `git status` succeeds in it
    pub fn exists(&self) -> bool {
        self.path.is_dir() && self.status(&[]).is_ok_and(|output| output.success())
    }

    /// Path of git's internal storage directory
    pub fn storage(&self) -> PathBuf {
        self.path.join(constants::git::STORAGE_DIR)
    }

    /// Initialize a repository unless a healthy one is already there
    ///
    /// Returns `true` when a new repository was created. No locking is
    /// done; concurrent modification of the path is not guarded against.
    pub fn init_if_new(&self) -> Result<bool> {
        if self.exists() {
            let output = self.status(&[])?;
            if !output.success() {
                return Err(GitError::StatusUnreadable {
                    path: self.path.clone(),
                });
            }
            return Ok(false);
        }

        Logger.info(&self.path, "Init new git repository");
        let output = self.init(&[])?;
        if !output.success() {
            return Err(GitError::InitFailed {
                path: self.path.clone(),
                code: output.code,
                stderr: output.stderr_lossy(),
            });
        }
        Ok(true)
    }

    /// First line printed by a command, or `None` when it exits non-zero
    fn getline(&self, cmd: &str, args: &[&str]) -> Result<Option<String>> {
        let output = self.execute(cmd, args)?;
        Ok(output.success().then(|| output.first_line()))
    }

    pub fn rev_parse(&self, rev: &str) -> Result<Option<String>> {
        self.getline("rev-parse", &[rev])
    }

    pub fn config_get(&self, name: &str) -> Result<Option<String>> {
        self.getline(Operation::Config.subcommand(), &[name])
    }

    /// Hash of a file as git would store it
    pub fn hash_object_of(&self, path: &str) -> Result<Option<String>> {
        self.getline(Operation::HashObject.subcommand(), &[path])
    }

    /// Apply `git config key value` for each pair, stopping at the first failure
    pub fn config_set<I, K, V>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in values {
            let (key, value) = (key.as_ref(), value.as_ref());
            let output = self.config(&[key, value])?;
            checked(format!("config {key} {value}"), output)?;
        }
        Ok(())
    }

    /// Names of all tags in the repository
    pub fn tags(&self) -> Result<Vec<String>> {
        let output = checked("tag".to_string(), self.tag(&[])?)?;
        Ok(output
            .stdout_lossy()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Output of `git describe`, or `None` when nothing describes the commit
    pub fn describe(&self, args: &[&str]) -> Result<Option<String>> {
        self.getline("describe", args)
    }

    /// Top-level directory of the work tree containing the bound path
    pub fn toplevel(&self) -> Result<Option<PathBuf>> {
        Ok(self
            .getline("rev-parse", &["--show-toplevel"])?
            .filter(|line| !line.is_empty())
            .map(PathBuf::from))
    }

    /// Handle rebound to the work tree's top-level directory
    pub fn at_toplevel(&self) -> Result<Git> {
        let root = self.toplevel()?.ok_or_else(|| GitError::StatusUnreadable {
            path: self.path.clone(),
        })?;
        Ok(Git::with_program(root, self.program.clone()))
    }

    /// Note attached to `treeish`, empty when there is none
    pub fn notes_get(&self, treeish: &str) -> Result<String> {
        let output = self.execute("notes", ["show", treeish])?;
        Ok(if output.success() {
            output.stdout_lossy().trim().to_string()
        } else {
            String::new()
        })
    }

    /// Attach a note to HEAD
    pub fn notes_add(&self, msg: &str) -> Result<()> {
        let output = self.execute("notes", ["add", "-m", msg])?;
        checked("notes add".to_string(), output).map(drop)
    }

    /// Patterns of `.git/info/exclude`, read from disk
    pub fn local_exclude(&self) -> Result<Exclude> {
        Exclude::read(self.storage().join("info").join("exclude"))
    }
}

fn checked(command: String, output: ProcessOutput) -> Result<ProcessOutput> {
    if output.success() {
        Ok(output)
    } else {
        Err(GitError::CommandFailed {
            command,
            code: output.code,
            stderr: output.stderr_lossy(),
        })
    }
}
