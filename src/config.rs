use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tracing::debug;

const CONFIG_DIR: &str = ".projy";
const CONFIG_FILE: &str = "config.toml";

/// Optional user configuration, loaded from `~/.projy/config.toml` by default.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjyConfig {
    /// Extra names for catalog templates, e.g. `py = "python"`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    pub cleanup_on_failure: Option<bool>,
}

impl ProjyConfig {
    /// Map an alias to its template id; anything else passes through untouched.
    pub fn resolve_template<'a>(&'a self, requested: &'a str) -> &'a str {
        self.aliases
            .get(requested)
            .map(String::as_str)
            .unwrap_or(requested)
    }

    pub fn cleanup_on_failure(&self) -> bool {
        self.cleanup_on_failure.unwrap_or(true)
    }
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> Result<ProjyConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}

/// An explicit path must exist; the home default is used only when present.
pub fn load(explicit: Option<&Utf8Path>) -> Result<ProjyConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file {} does not exist", path);
        }
        debug!("loading config from {}", path);
        return load_from_path(path);
    }

    match default_path() {
        Ok(path) if path.is_file() => {
            debug!("loading config from {}", path);
            load_from_path(&path)
        }
        Ok(path) => {
            debug!("no config at {}; using defaults", path);
            Ok(ProjyConfig::default())
        }
        Err(err) => {
            debug!("skipping user config: {err:#}");
            Ok(ProjyConfig::default())
        }
    }
}

pub fn default_path() -> Result<Utf8PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not determine home directory"))?;
    let path = home.join(CONFIG_DIR).join(CONFIG_FILE);
    Utf8PathBuf::from_path_buf(path).map_err(|_| anyhow!("config path not valid UTF-8"))
}
