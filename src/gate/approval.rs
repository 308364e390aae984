/// Unforgeable proof that the install flag was read and was affirmative.
///
/// Construction is double-locked:
/// 1. `Seal` is a private type, so no struct literal outside this file.
/// 2. `new()` is `pub(super)`, so only `gate` can mint one.
///
/// No `Clone`, `Copy`, `Default`, or `From`. A runner consumes it, so one
/// affirmative answer buys exactly one install.
///
/// ```compile_fail
/// use post_gen_hook::gate::approval::InstallApproval;
///
/// let _approval = InstallApproval::new();
/// ```
pub struct InstallApproval {
    _seal: Seal,
}

struct Seal;

impl InstallApproval {
    pub(super) fn new() -> Self {
        Self { _seal: Seal }
    }
}

impl std::fmt::Debug for InstallApproval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InstallApproval")
    }
}
