use log::debug;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// `git describe` arguments: nearest tag, falling back to the abbreviated
/// hash, with a `-dirty` suffix for uncommitted changes.
pub const DESCRIBE_ARGS: [&str; 4] = ["describe", "--tags", "--always", "--dirty"];

#[derive(Error, Debug)]
pub enum GitError {
    #[error("git is not installed or not on PATH")]
    NotInstalled,
    #[error("failed to run git: {0}")]
    Spawn(#[source] io::Error),
    #[error("git describe failed ({})", describe_status(.code))]
    Failed { code: Option<i32> },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl GitError {
    /// Process exit status to report for this error. A failing git passes
    /// its own code through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitError::Failed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;

/// Describe the repository containing the current working directory.
///
/// The descriptor is returned as raw bytes: ref names are not required to be
/// utf-8, and the output is passed on untouched apart from trimming.
pub fn describe() -> Result<Vec<u8>> {
    run_describe(Command::new("git"))
}

/// Describe the repository containing `dir`, ignoring any repository the
/// environment points at.
pub fn describe_in<P: AsRef<Path>>(dir: P) -> Result<Vec<u8>> {
    let mut command = Command::new("git");
    command
        .current_dir(dir)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE");
    run_describe(command)
}

fn run_describe(mut command: Command) -> Result<Vec<u8>> {
    command
        .args(DESCRIBE_ARGS)
        .stdin(Stdio::null())
        // git's own diagnostics go straight to the user
        .stderr(Stdio::inherit());
    debug!("running {:?}", command);

    let output = command.output().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GitError::NotInstalled,
        _ => GitError::Spawn(e),
    })?;

    if !output.status.success() {
        return Err(GitError::Failed {
            code: output.status.code(),
        });
    }

    debug!("raw descriptor: {:?}", String::from_utf8_lossy(&output.stdout));
    Ok(output.stdout.trim_ascii().to_vec())
}
