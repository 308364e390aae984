use std::process::{Command, ExitStatus};

use crate::error::HookError;
use crate::gate::approval::InstallApproval;

use super::{ExitState, InstallCommand, Runner};

/// Runs the command as a child of this process via `std::process::Command`.
///
/// Stdio is inherited so the environment manager's progress reaches the
/// terminal. Working directory and environment are the hook's own.
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn name(&self) -> &str {
        "process"
    }

    fn run(
        &self,
        command: &InstallCommand,
        _approval: InstallApproval,
    ) -> Result<ExitState, HookError> {
        tracing::debug!(%command, "spawning");

        let status = Command::new(command.program())
            .args(command.args())
            .status()
            .map_err(|source| HookError::Spawn {
                program: command.program().to_owned(),
                source,
            })?;

        Ok(status.into())
    }
}

impl From<ExitStatus> for ExitState {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitState::Code(code),
            None => ExitState::Signalled,
        }
    }
}
