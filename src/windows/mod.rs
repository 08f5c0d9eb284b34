//! Blocking or rewriting commands on Windows hosts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::command::CommandSpec;
use crate::error::Error;
use crate::platform::Platform;


/// Launcher used when routing a command through the Windows Subsystem for Linux.
pub const WSL_LAUNCHER: &str = "wsl.exe";

/// Reason reported when Windows execution is blocked.
pub const BLOCKED_REASON: &str =
    "Running this CLI on Windows is experimental. Please use WSL or switch windowsMode.";

/// How commands are run on Windows hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowsMode {
    /// Refuse to run and tell the user why.
    #[default]
    Block,
    /// Run the command inside WSL via `wsl.exe`.
    Wsl,
    /// Run the command as-is.
    Native,
}

impl WindowsMode {
    /// The identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Wsl => "wsl",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for WindowsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "wsl" => Ok(Self::Wsl),
            "native" => Ok(Self::Native),
            _ => Err(Error::UnknownWindowsMode(s.trim().to_string())),
        }
    }
}

/// What the host should do with a command on the current platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowsDecision {
    /// Do not run anything; show `reason` to the user.
    Blocked {
        /// Human-readable explanation.
        reason: String,
    },
    /// Run this (possibly rewritten) command.
    Proceed(CommandSpec),
}

impl WindowsDecision {
    /// Whether execution must be aborted.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Decide whether `spec` may run on `platform` and how it must be rewritten.
///
/// Non-Windows platforms always proceed unchanged. On Windows, `wsl` mode
/// turns `codex -p abc` into `wsl.exe codex -p abc`.
#[must_use]
pub fn resolve_windows_command(
    platform: Platform,
    mode: WindowsMode,
    spec: CommandSpec,
) -> WindowsDecision {
    if !platform.is_windows() {
        return WindowsDecision::Proceed(spec);
    }

    let decision = match mode {
        WindowsMode::Block => WindowsDecision::Blocked {
            reason: BLOCKED_REASON.to_string(),
        },
        WindowsMode::Wsl => {
            let CommandSpec { base, mut args } = spec;
            args.insert(0, base);
            WindowsDecision::Proceed(CommandSpec {
                base: WSL_LAUNCHER.to_string(),
                args,
            })
        }
        WindowsMode::Native => WindowsDecision::Proceed(spec),
    };
    tracing::debug!(%mode, ?decision, "windows adaptation");
    decision
}
