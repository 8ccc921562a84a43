//! Common test support utilities and fixtures

#![allow(dead_code)]

use gitwrap::Git;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the gitwrap binary with given arguments
pub fn run_cli(args: &[&str], cwd: &Path) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_gitwrap"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute gitwrap");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Initialize a git repository with an identity so commits work
pub fn init_git_repo(path: &Path) -> Git {
    fs::create_dir_all(path).expect("Failed to create repo dir");
    let git = Git::new(path);
    assert!(git.init(&[]).unwrap().success());
    git.config_set([
        ("user.name", "Test User"),
        ("user.email", "test@example.com"),
        ("commit.gpgsign", "false"),
    ])
    .expect("Failed to configure identity");
    git
}

/// Initialize a repository with one committed README
pub fn init_committed_repo(path: &Path) -> Git {
    let git = init_git_repo(path);
    fs::write(path.join("README.md"), "# Test Repository").unwrap();
    assert!(git.add(&["README.md"]).unwrap().success());
    assert!(git.commit(&["-m", "Initial commit"]).unwrap().success());
    git
}

/// Write an executable script that records its arguments, one per line,
/// into `args.log` next to itself and exits with `code`
pub fn recording_program(dir: &Path, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-git.sh");
    let log = dir.join("args.log");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\nexit {}\n",
            log.display(),
            code
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Arguments captured by [`recording_program`]
pub fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
