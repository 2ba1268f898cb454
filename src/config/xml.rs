//! XML configuration support.
//!
//! Optional file, parsed with quick_xml + serde:
//! <config>
//!   <root>/workspaces/Nexus-Community-Project</root>
//!   <target_dir>build-scripts</target_dir>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/organize_scripts.log</log_file>
//! </config>
//!
//! Every element is optional; blank elements fall back to the built-ins.
//! Unknown elements and unknown log levels are errors.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{config_path_is_explicit, default_config_path};
use super::types::{Config, LogLevel};

#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    root: Option<String>,
    target_dir: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(root) = non_blank(parsed.root) {
        cfg.root = PathBuf::from(root);
    }
    if let Some(target) = non_blank(parsed.target_dir) {
        cfg.target_dir = target;
    }
    if let Some(level) = non_blank(parsed.log_level) {
        cfg.log_level = match LogLevel::parse(&level) {
            Some(l) => l,
            None => bail!("invalid log_level '{level}' (expected quiet, normal, info or debug)"),
        };
    }
    cfg.log_file = non_blank(parsed.log_file).map(PathBuf::from);

    Ok(cfg)
}

/// Parse XML text into a Config.
pub fn parse_config_xml(contents: &str) -> Result<Config> {
    let parsed: XmlConfig = if contents.trim().is_empty() {
        XmlConfig::default()
    } else {
        from_xml_str(contents).context("parse config xml")?
    };
    xml_to_config(parsed)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    parse_config_xml(&contents).with_context(|| format!("load config '{}'", path.display()))
}

/// Load the effective file config.
///
/// - `$ORGANIZE_SCRIPTS_CONFIG` set: the file must exist and parse.
/// - otherwise the default location is used if present, else built-in defaults.
///
/// No template is written; the tool works without any config file.
pub fn load_config() -> Result<Config> {
    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };

    if !path.exists() {
        if config_path_is_explicit() {
            bail!("config file from environment does not exist: {}", path.display());
        }
        debug!(path = %path.display(), "No config file; using built-in defaults");
        return Ok(Config::default());
    }

    load_config_from_xml_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripts::{DEFAULT_ROOT, DEFAULT_TARGET_DIR};

    #[test]
    fn full_document() {
        let cfg = parse_config_xml(
            "<config>\n  <root> /srv/nexus </root>\n  <target_dir>legacy</target_dir>\n  <log_level>DEBUG</log_level>\n  <log_file>/var/log/organize.log</log_file>\n</config>",
        )
        .unwrap();
        assert_eq!(cfg.root, PathBuf::from("/srv/nexus"));
        assert_eq!(cfg.target_dir, "legacy");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/organize.log")));
        assert!(!cfg.dry_run);
    }

    #[test]
    fn missing_and_blank_elements_use_defaults() {
        let cfg = parse_config_xml("<config><root></root><log_file>  </log_file></config>").unwrap();
        assert_eq!(cfg.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(cfg.target_dir, DEFAULT_TARGET_DIR);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse_config_xml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn unknown_element_is_rejected() {
        let err = parse_config_xml("<config><scripts>x.sh</scripts></config>").unwrap_err();
        assert!(format!("{err:#}").contains("unknown field"), "{err:#}");
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(parse_config_xml("<config><log_level>loud</log_level></config>").is_err());
    }
}
