pub mod process;

use std::fmt;

use crate::error::HookError;
use crate::gate::approval::InstallApproval;

/// Environment manager binary.
pub const PROGRAM: &str = "conda";

/// Manifest the environment is created from, relative to the working directory.
pub const MANIFEST: &str = "environment.yml";

/// A fully specified external command: program plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    program: String,
    args: Vec<String>,
}

impl InstallCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_owned(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `conda env create --file environment.yml`
    pub fn conda_env_create() -> Self {
        Self::new(PROGRAM, ["env", "create", "--file", MANIFEST])
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self::conda_env_create()
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    Code(i32),
    /// Terminated by a signal; no exit code.
    Signalled,
}

impl ExitState {
    pub fn success(&self) -> bool {
        matches!(self, ExitState::Code(0))
    }
}

/// Extension point for running the install command. Tests swap in a
/// recording fake.
///
/// Blocks until the child exits. Non-zero exits are returned as `Ok`, only a
/// failure to launch is an `Err`.
pub trait Runner: Send + Sync {
    fn name(&self) -> &str;

    fn run(
        &self,
        command: &InstallCommand,
        approval: InstallApproval,
    ) -> Result<ExitState, HookError>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(
        &self,
        command: &InstallCommand,
        approval: InstallApproval,
    ) -> Result<ExitState, HookError> {
        (**self).run(command, approval)
    }
}
