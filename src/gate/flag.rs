/// The scaffolding prompt's answer to "install the environment?".
///
/// Affirmative iff its lowercase form is exactly `"y"`. Anything else,
/// including `"yes"` and the empty string, declines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallFlag(String);

impl InstallFlag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the value still holds template syntax, i.e. the scaffolding
    /// tool never substituted it.
    pub fn is_unrendered(&self) -> bool {
        self.0.contains("{{")
    }

    pub(super) fn is_affirmative(&self) -> bool {
        self.0.to_lowercase() == "y"
    }
}

impl From<&str> for InstallFlag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InstallFlag {
    fn from(value: String) -> Self {
        Self(value)
    }
}
