use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cobalt.toml";

// Top-level cobalt.toml
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ServerConfig {
    pub log: LogConfig,
    pub registry: RegistryConfig,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub level: String,
    /// Also write log records to this file
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Extension files applied in order before the registry is shared.
    pub extensions: Vec<PathBuf>,
}

impl ServerConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Loads `path`; relative paths inside the file are taken relative to its directory.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("reading {}: {e}", path.display()))?;
        let mut cfg = Self::from_toml_str(&text)?;
        if let Some(base) = path.parent() {
            cfg.rebase(base);
        }
        Ok(cfg)
    }

    fn rebase(&mut self, base: &Path) {
        for ext in &mut self.registry.extensions {
            if ext.is_relative() {
                *ext = base.join(&*ext);
            }
        }
        if let Some(file) = self.log.file.as_mut() {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_take_defaults() {
        let cfg = ServerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.log.level, "info");
        assert!(cfg.log.file.is_none());
        assert!(cfg.registry.extensions.is_empty());
    }

    #[test]
    fn parses_log_and_registry_sections() {
        let cfg = ServerConfig::from_toml_str(
            r#"
            [log]
            level = "debug"
            file = "cobalt.log"

            [registry]
            extensions = ["ext/purpur.toml", "/etc/cobalt/extra.toml"]
        "#,
        )
        .unwrap();
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.registry.extensions.len(), 2);
    }

    #[test]
    fn rebase_only_touches_relative_paths() {
        let mut cfg = ServerConfig::from_toml_str(
            r#"
            [log]
            file = "cobalt.log"
            [registry]
            extensions = ["ext/a.toml", "/abs/b.toml"]
        "#,
        )
        .unwrap();
        cfg.rebase(Path::new("/srv/cobalt"));
        assert_eq!(
            cfg.registry.extensions,
            vec![
                PathBuf::from("/srv/cobalt/ext/a.toml"),
                PathBuf::from("/abs/b.toml")
            ]
        );
        assert_eq!(cfg.log.file, Some(PathBuf::from("/srv/cobalt/cobalt.log")));
    }
}
