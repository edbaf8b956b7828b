use crate::core::error::{LauncherError, Result};
use std::ffi::OsStr;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// A command line handed to the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
}

impl ShellCommand {
    pub fn new(line: &str) -> Self {
        let (program, flag) = if cfg!(windows) {
            ("cmd", "/C")
        } else {
            ("/bin/sh", "-c")
        };

        Self {
            program: program.to_string(),
            args: vec![flag.to_string(), line.to_string()],
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command line as given to the shell.
    pub fn line(&self) -> &str {
        self.args.last().map(|s| s.as_str()).unwrap_or_default()
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    /// Run a program with full stdio passthrough and wait for it to exit.
    pub async fn run_inherited<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<ExitStatus> {
        tracing::debug!(program, "spawning child process");

        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                LauncherError::CommandFailed(format!("Failed to execute {}: {}", program, e))
            })
    }

    pub async fn run_shell(command: &ShellCommand) -> Result<ExitStatus> {
        tracing::debug!(line = command.line(), "running through host shell");
        Self::run_inherited(command.program(), command.args()).await
    }
}
