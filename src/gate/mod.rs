pub mod approval;
pub mod flag;

use approval::InstallApproval;
use flag::InstallFlag;

/// Result of reading the install flag.
#[derive(Debug)]
pub enum Decision {
    Install(InstallApproval),
    Reject,
}

/// Read the flag and decide whether to install.
///
/// Takes the flag by value: it is read once here and then gone, before any
/// process exists.
pub fn evaluate(flag: InstallFlag) -> Decision {
    if flag.is_unrendered() {
        tracing::warn!(flag = flag.as_str(), "install flag was never substituted");
    }

    if flag.is_affirmative() {
        tracing::info!("installation accepted");
        Decision::Install(InstallApproval::new())
    } else {
        tracing::info!(flag = flag.as_str(), "installation declined");
        Decision::Reject
    }
}
