use std::process::Command;

use anyhow::{Context, Result};

pub trait Executor {
    /// Runs `command` through a shell and returns its exit status. `-1`
    /// stands in for processes that ended without one (e.g. by signal).
    fn run(&self, command: &str) -> Result<i32>;
}

/// Runs commands through the platform shell, inheriting stdio so the child
/// owns the terminal while it runs.
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&self, command: &str) -> Result<i32> {
        let status = shell_command(command)
            .status()
            .with_context(|| format!("running `{command}`"))?;
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    // Inside Git Bash / MSYS sessions, route through bash so Unix-ish
    // commands keep working.
    if bash_like_env() {
        let mut cmd = Command::new("C:/Program Files/Git/bin/bash.exe");
        cmd.arg("-lc").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }
}

#[cfg(windows)]
fn bash_like_env() -> bool {
    use std::env;

    env::var_os("MSYSTEM").is_some()
        || env::var("SHELL")
            .map(|s| s.to_ascii_lowercase().contains("bash"))
            .unwrap_or(false)
}

/// What became of one activated selection. Display lives with the caller;
/// none of these variants ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// The item carried no command.
    NothingConfigured,
    /// The command ran to completion with this exit status.
    Finished { code: i32 },
    /// The executor could not run the command at all (e.g. spawn failure).
    Failed { error: String },
}

/// Hands a selection's command to the executor. Items without a command
/// never reach it.
pub fn run_selection(command: Option<&str>, executor: &impl Executor) -> RunReport {
    match command {
        None => RunReport::NothingConfigured,
        Some(cmd) => match executor.run(cmd) {
            Ok(code) => RunReport::Finished { code },
            Err(err) => RunReport::Failed {
                error: format!("{err:#}"),
            },
        },
    }
}
