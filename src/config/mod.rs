//! TOML configuration and launch profiles.

mod ops;


use serde::{Deserialize, Serialize};

use crate::command::CommandSpec;
use crate::cwd::CwdMode;
use crate::precheck::Lookup;
use crate::windows::WindowsMode;

/// Settings read from `~/.config/replrunner/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Working-directory policy.
    pub cwd: CwdConfig,
    /// Windows handling.
    pub windows: WindowsConfig,
    /// Binary precheck before launching.
    pub precheck: PrecheckConfig,
    /// Commands that can be launched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
}

/// `[cwd]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CwdConfig {
    /// How the working directory is chosen.
    pub mode: CwdMode,
    /// Reuse the last picked folder in `prompt` mode.
    pub remember_selection: bool,
}

/// `[windows]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowsConfig {
    /// Block, route through WSL, or run natively.
    pub mode: WindowsMode,
}

/// `[precheck]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecheckConfig {
    /// Verify the command resolves before printing a plan.
    pub enabled: bool,
    /// How bare command names are resolved.
    pub lookup: Lookup,
}

/// One `[[profiles]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identifier used with `--profile`.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Executable, e.g. `codex`. Flags belong in `args`.
    pub command: String,
    /// Raw arguments; composite entries like `"-p brain"` are allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Name of the terminal to create or reuse; defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_name: Option<String>,
}

impl Profile {
    /// Terminal name with surrounding whitespace removed.
    #[must_use]
    pub fn terminal_name(&self) -> &str {
        self.terminal_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.label.trim())
    }

    /// The command this profile launches.
    #[must_use]
    pub fn spec(&self) -> CommandSpec {
        CommandSpec::new(self.command.clone(), self.args.iter().cloned())
    }
}

impl Default for CwdConfig {
    fn default() -> Self {
        Self {
            mode: CwdMode::default(),
            remember_selection: true,
        }
    }
}
