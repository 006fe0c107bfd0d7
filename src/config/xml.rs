//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless UNACCENT_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the config file; target validation
//!   happens in the batch pass.
//! - Unknown XML fields are a hard error to surface misconfigurations early.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::translit::FixRule;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "UNACCENT_CONFIG";

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    lowercase: Option<bool>,
    max_depth: Option<usize>,
    log_level: Option<String>,
    log_file: Option<String>,
    /// Repeated `<encoding_fix from=".." to=".."/>` elements.
    #[serde(rename = "encoding_fix", default)]
    encoding_fix: Vec<FixRule>,
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(lower) = parsed.lowercase {
        cfg.lowercase = lower;
    }
    cfg.max_depth = parsed.max_depth;
    if let Some(s) = parsed.log_level.as_deref() {
        if let Ok(level) = s.trim().parse::<LogLevel>() {
            cfg.log_level = level;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    cfg.encoding_fixes = parsed.encoding_fix;

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the effective config:
/// - UNACCENT_CONFIG, when set, must exist and parse (explicit paths fail hard);
/// - otherwise the platform default path, when present;
/// - otherwise built-in defaults.
pub fn load_config() -> Result<Config> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        return load_config_from_xml_path(Path::new(&p));
    }
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_config_from_xml_path(&path);
        }
    }
    Ok(Config::default())
}

/// Create the template config file and parent directory.
/// Refuses to write through symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow::anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/unaccent.log".into());

    let content = format!(
        "<!--\n  unaccent configuration (XML)\n\n  Fields:\n    lowercase     -> also fold sanitized names to lowercase (true/false)\n    max_depth     -> cap directory recursion at this depth (omit for unlimited)\n    log_level     -> quiet | normal | info | debug\n    log_file      -> path to log file (optional; stdout/stderr still used)\n    encoding_fix  -> extra mis-encoding repairs, e.g. <encoding_fix from=\"&#195;&#169;\" to=\"&#233;\"/>\n\n  Notes:\n    - CLI flags override XML values.\n    - The built-in repair rules for garbled \"a/o with diaeresis\" always apply.\n-->\n<config>\n  <lowercase>false</lowercase>\n  <log_level>normal</log_level>\n  <log_file>{suggested_log}</log_file>\n</config>\n"
    );

    fs::write(path, content)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }

    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if UNACCENT_CONFIG is not set and none exists;
/// return the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }

    let cfg_path = default_config_path()?;
    if cfg_path.exists() {
        return None;
    }

    match create_template_config(&cfg_path) {
        Ok(()) => Some(cfg_path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                cfg_path.display(),
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_all_fields() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(
            &path,
            r#"<config>
  <lowercase>true</lowercase>
  <max_depth>3</max_depth>
  <log_level>debug</log_level>
  <log_file>/tmp/unaccent.log</log_file>
  <encoding_fix from="Ã©" to="é"/>
  <encoding_fix from="Ã¥" to="å"/>
</config>"#,
        )
        .unwrap();

        let cfg = load_config_from_xml_path(&path).unwrap();
        assert!(cfg.lowercase);
        assert_eq!(cfg.max_depth, Some(3));
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/unaccent.log")));
        assert_eq!(cfg.encoding_fixes.len(), 2);
        assert_eq!(cfg.rules().apply("cafÃ© blÃ¥ Ã¤"), "café blå ä");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config><log_level>quiet</log_level></config>").unwrap();

        let cfg = load_config_from_xml_path(&path).unwrap();
        assert!(!cfg.lowercase);
        assert_eq!(cfg.max_depth, None);
        assert_eq!(cfg.log_level, LogLevel::Quiet);
        assert!(cfg.encoding_fixes.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config><surprise>1</surprise></config>").unwrap();
        assert!(load_config_from_xml_path(&path).is_err());
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let td = tempdir().unwrap();
        let path = td.path().join("sub").join("config.xml");
        create_template_config(&path).unwrap();
        let cfg = load_config_from_xml_path(&path).unwrap();
        assert!(!cfg.lowercase);
        assert_eq!(cfg.log_level, LogLevel::Normal);
    }
}
