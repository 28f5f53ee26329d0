//! Running external programs (font generator, git, npm).

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use crate::{Error, Result};

/// Runs external programs with explicit argument vectors; never through a shell.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Runs commands as child processes, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        debug!("running {program} {} in {}", args.join(" "), cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| Error::tool(program, format!("could not start: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::tool(
                format!("{program} {}", args.join(" ")),
                format!("exited with {status}"),
            ))
        }
    }
}

/// A command captured by [`RecordingRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Records commands instead of running them; optionally fails on one program.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<RecordedCommand>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(program: impl Into<String>) -> Self {
        Self { fail_on: Some(program.into()), ..Self::default() }
    }

    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.borrow().clone()
    }

    /// Each recorded command as one `program arg arg` line.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|c| {
                let mut line = c.program.clone();
                for arg in &c.args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        self.commands.borrow_mut().push(RecordedCommand {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
        });
        match &self.fail_on {
            Some(p) if p == program => Err(Error::tool(program, "exited with exit status: 1")),
            _ => Ok(()),
        }
    }
}

/// Build an owned argument vector from string literals.
pub fn args<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        (**self).run(program, args, cwd)
    }
}
