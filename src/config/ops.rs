use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use super::{Config, Profile};

impl Config {
    /// Location of the config file.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("replrunner").join("config.toml"))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config file, creating its directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to an explicit path, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Write the default config to the standard location. See [`Config::init_at`].
    pub fn init(force: bool) -> Result<PathBuf> {
        let path = Self::path()?;
        Self::init_at(&path, force)?;
        Ok(path)
    }

    /// Write the default config to `path`.
    ///
    /// An existing file holds the user's profiles, so it is only replaced
    /// when `force` is set.
    pub fn init_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config already exists at {}; pass --force to overwrite it",
                path.display()
            );
        }
        Self::default().save_to(path)
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "cwd.mode" => Ok(self.cwd.mode.to_string()),
            "cwd.remember_selection" => Ok(self.cwd.remember_selection.to_string()),
            "windows.mode" => Ok(self.windows.mode.to_string()),
            "precheck.enabled" => Ok(self.precheck.enabled.to_string()),
            "precheck.lookup" => Ok(self.precheck.lookup.to_string()),
            _ => bail!("Unknown config key: {key}"),
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cwd.mode" => self.cwd.mode = value.parse()?,
            "cwd.remember_selection" => {
                self.cwd.remember_selection = parse_bool(value)?;
            }
            "windows.mode" => self.windows.mode = value.parse()?,
            "precheck.enabled" => self.precheck.enabled = parse_bool(value)?,
            "precheck.lookup" => self.precheck.lookup = value.parse()?,
            _ => bail!("Unknown config key: {key}"),
        }
        Ok(())
    }

    /// Pick a profile by id. Without an id, a single configured profile is
    /// chosen automatically.
    pub fn profile(&self, id: Option<&str>) -> Result<&Profile> {
        if let Some(id) = id {
            return self
                .profiles
                .iter()
                .find(|p| p.id == id)
                .with_context(|| format!("No profile with id {id:?}. Known: {}", self.profile_ids()));
        }
        match self.profiles.as_slice() {
            [] => bail!(
                "No profiles configured. Add a [[profiles]] entry to {}",
                Self::path().map_or_else(|_| "the config file".to_string(), |p| p.display().to_string())
            ),
            [only] => Ok(only),
            _ => bail!("Several profiles configured; pick one with --profile ({})", self.profile_ids()),
        }
    }

    fn profile_ids(&self) -> String {
        self.profiles
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .with_context(|| format!("Invalid boolean value: {value}"))
}
