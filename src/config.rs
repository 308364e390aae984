use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::HookError;
use crate::gate::flag::InstallFlag;

const MAX_CONFIG_FILE_SIZE: u64 = 16 * 1024; // 16 KiB

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hook.toml";

// --- TOML deserialization structs (private, map 1:1 to TOML schema) ---

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    hook: HookSection,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HookSection {
    install_environment: Option<String>,
}

/// Settings a scaffolding tool can render next to the hook.
///
/// ```toml
/// [hook]
/// install_environment = "y"
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HookConfig {
    install_environment: Option<String>,
}

impl FromStr for HookConfig {
    type Err = HookError;

    fn from_str(content: &str) -> Result<Self, HookError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| HookError::ConfigLoad(e.to_string()))?;

        Ok(Self {
            install_environment: file.hook.install_environment,
        })
    }
}

impl HookConfig {
    /// Load settings from a TOML file. A missing file yields empty settings;
    /// an oversized, unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, HookError> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(HookError::ConfigLoad(format!(
                    "cannot stat {}: {e}",
                    path.display()
                )));
            }
        };

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(HookError::ConfigLoad(format!(
                "{} exceeds {MAX_CONFIG_FILE_SIZE} byte limit",
                path.display()
            )));
        }

        std::fs::read_to_string(path)
            .map_err(|e| HookError::ConfigLoad(format!("cannot read {}: {e}", path.display())))?
            .parse()
    }
}

/// Pick the install flag.
///
/// An explicit value (CLI or environment) wins and the settings file is not
/// touched. Otherwise the file is consulted; one that cannot be loaded (e.g.
/// a project's own `hook.toml` with a different schema) is logged and counts
/// as no answer, which declines.
pub fn resolve_flag(explicit: Option<String>, path: &Path) -> InstallFlag {
    if let Some(raw) = explicit {
        return InstallFlag::from(raw);
    }

    match HookConfig::load(path) {
        Ok(config) => config
            .install_environment
            .map(InstallFlag::from)
            .unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
            InstallFlag::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FOREIGN: &str = "[project]\nname = \"x\"\n";

    fn settings(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn parse_install_environment() {
        let config = HookConfig::from_str("[hook]\ninstall_environment = \"Y\"\n").unwrap();
        assert_eq!(config.install_environment.as_deref(), Some("Y"));
    }

    #[test]
    fn empty_file_is_valid() {
        let config = HookConfig::from_str("").unwrap();
        assert_eq!(config, HookConfig::default());
    }

    #[test]
    fn empty_section_is_valid() {
        let config = HookConfig::from_str("[hook]\n").unwrap();
        assert_eq!(config.install_environment, None);
    }

    #[test]
    fn unknown_field_rejected() {
        let toml = r#"
[hook]
install_environment = "y"
manifest = "other.yml"
"#;
        let err = HookConfig::from_str(toml).unwrap_err();
        assert!(matches!(err, HookError::ConfigLoad(_)));
    }

    #[test]
    fn unknown_section_rejected() {
        let err = HookConfig::from_str(FOREIGN).unwrap_err();
        assert!(matches!(err, HookError::ConfigLoad(_)));
    }

    #[test]
    fn non_string_flag_rejected() {
        let err = HookConfig::from_str("[hook]\ninstall_environment = true\n").unwrap_err();
        assert!(matches!(err, HookError::ConfigLoad(_)));
    }

    #[test]
    fn load_from_file() {
        let (_dir, path) = settings("[hook]\ninstall_environment = \"n\"\n");
        let config = HookConfig::load(&path).unwrap();
        assert_eq!(config.install_environment.as_deref(), Some("n"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = HookConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, HookConfig::default());
    }

    #[test]
    fn load_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = HookConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, HookError::ConfigLoad(_)));
    }

    #[test]
    fn oversized_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let padding = "#".repeat(MAX_CONFIG_FILE_SIZE as usize + 1);
        writeln!(file, "{padding}").unwrap();
        let err = HookConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, HookError::ConfigLoad(msg) if msg.contains("byte limit")));
    }

    #[test]
    fn explicit_flag_wins_over_file() {
        let (_dir, path) = settings("[hook]\ninstall_environment = \"n\"\n");
        assert_eq!(resolve_flag(Some("y".to_owned()), &path).as_str(), "y");
    }

    #[test]
    fn explicit_flag_ignores_foreign_file() {
        let (_dir, path) = settings(FOREIGN);
        assert_eq!(resolve_flag(Some("Y".to_owned()), &path).as_str(), "Y");
    }

    #[test]
    fn file_flag_used_without_explicit() {
        let (_dir, path) = settings("[hook]\ninstall_environment = \"y\"\n");
        assert_eq!(resolve_flag(None, &path).as_str(), "y");
    }

    #[test]
    fn foreign_file_declines() {
        let (_dir, path) = settings(FOREIGN);
        assert_eq!(resolve_flag(None, &path), InstallFlag::default());
    }

    #[test]
    fn no_source_gives_empty_flag() {
        let dir = tempfile::tempdir().unwrap();
        let flag = resolve_flag(None, &dir.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(flag, InstallFlag::default());
    }
}
