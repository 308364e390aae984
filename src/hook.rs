use std::io::Write;

use crate::error::HookError;
use crate::gate::{self, Decision, flag::InstallFlag};
use crate::runner::{InstallCommand, Runner};

pub const STARTING: &str = "installing dependencies...";
pub const SUCCEEDED: &str = "The dependencies have been installed";
pub const FAILED: &str = "There was an error during the installation";
pub const REJECTED: &str = "User rejected the installation of dependencies";

/// Terminal state of one hook run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Failed,
    Rejected,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Installed => SUCCEEDED,
            Outcome::Failed => FAILED,
            Outcome::Rejected => REJECTED,
        }
    }
}

/// Post-generation install hook.
///
/// Reads the flag, runs the install command at most once, and writes one
/// human-readable line per step to `out`. A failed or unlaunchable install
/// is reported, never returned as an error.
pub struct InstallHook<R> {
    runner: R,
    command: InstallCommand,
}

impl<R: Runner> InstallHook<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            command: InstallCommand::default(),
        }
    }

    pub fn run(&self, flag: InstallFlag, out: &mut impl Write) -> Result<Outcome, HookError> {
        let approval = match gate::evaluate(flag) {
            Decision::Install(approval) => approval,
            Decision::Reject => {
                writeln!(out, "{REJECTED}")?;
                return Ok(Outcome::Rejected);
            }
        };

        writeln!(out, "{STARTING}")?;
        // The child shares the terminal; the notice must land first.
        out.flush()?;

        let outcome = match self.runner.run(&self.command, approval) {
            Ok(state) if state.success() => Outcome::Installed,
            Ok(state) => {
                tracing::warn!(command = %self.command, ?state, "install command failed");
                Outcome::Failed
            }
            Err(e) => {
                tracing::warn!(runner = self.runner.name(), error = %e, "install command could not be started");
                Outcome::Failed
            }
        };

        writeln!(out, "{}", outcome.message())?;
        Ok(outcome)
    }
}
