//! Checking that a command resolves to a binary without running it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use crate::error::Error;
use crate::platform::Platform;


/// Filesystem and `PATH` lookups used by [`precheck_binary`].
pub trait BinaryProbe {
    /// Whether `path` exists on disk.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Whether a bare command `name` resolves through the search path.
    fn resolve(&self, name: &str) -> bool;
}

/// Resolves commands in-process with the `which` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhichProbe;

impl BinaryProbe for WhichProbe {
    fn resolve(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(found) => {
                tracing::debug!(name, path = %found.display(), "resolved binary");
                true
            }
            Err(e) => {
                tracing::debug!(name, error = %e, "binary not found");
                false
            }
        }
    }
}

/// Resolves commands by running `where` (Windows) or `which` (elsewhere).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellProbe {
    /// Selects the lookup command.
    pub platform: Platform,
}

impl BinaryProbe for ShellProbe {
    fn resolve(&self, name: &str) -> bool {
        let lookup = if self.platform.is_windows() { "where" } else { "which" };
        match Command::new(lookup)
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!(lookup, name, error = %e, "could not run lookup command");
                false
            }
        }
    }
}

/// Which [`BinaryProbe`] implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
    /// In-process resolution ([`WhichProbe`]).
    #[default]
    Which,
    /// Shell out to the platform lookup command ([`ShellProbe`]).
    Shell,
}

impl Lookup {
    /// The identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Which => "which",
            Self::Shell => "shell",
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lookup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "which" => Ok(Self::Which),
            "shell" => Ok(Self::Shell),
            _ => Err(Error::UnknownLookup(s.trim().to_string())),
        }
    }
}

/// Build the probe selected by `lookup`.
#[must_use]
pub fn probe_for(lookup: Lookup, platform: Platform) -> Box<dyn BinaryProbe> {
    match lookup {
        Lookup::Which => Box::new(WhichProbe),
        Lookup::Shell => Box::new(ShellProbe { platform }),
    }
}

/// Outcome of [`precheck_binary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecheckResult {
    /// The binary was found.
    pub ok: bool,
    /// The token that was checked.
    pub base: String,
}

/// Check, without running it, whether the first token of `command` names a
/// runnable binary.
///
/// Path-like tokens (`/usr/bin/python3`, `./run.sh`, `C:\tools\x.exe`) are
/// only checked for existence; bare names go through `probe.resolve`.
#[must_use]
pub fn precheck_binary(command: &str, probe: &dyn BinaryProbe) -> PrecheckResult {
    let base = command.split_whitespace().next().unwrap_or_default().to_string();
    if base.is_empty() {
        return PrecheckResult { ok: false, base };
    }

    let ok = if is_path_like(&base) {
        probe.exists(Path::new(&base))
    } else {
        probe.resolve(&base)
    };
    if !ok {
        tracing::warn!(%base, "command not found");
    }
    PrecheckResult { ok, base }
}

/// Absolute paths and anything with a separator (`./x`, `bin/x`,
/// `C:\tools\x.exe`) count as paths rather than command names.
fn is_path_like(base: &str) -> bool {
    Path::new(base).is_absolute() || base.contains(['/', '\\'])
}
