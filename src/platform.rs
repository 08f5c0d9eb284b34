//! Host platform families.

use serde::{Deserialize, Serialize};

/// The shell family a command line is built for.
///
/// Hosts identify themselves with strings such as `win32`, `linux` or
/// `darwin`; only the Windows family changes behavior, everything else is
/// treated as POSIX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `sh`-compatible shells: single-quote escaping, case-sensitive paths.
    #[default]
    Posix,
    /// `cmd.exe`/PowerShell: double-quote escaping, case-insensitive paths.
    Windows,
}

impl Platform {
    /// Platform of the running binary.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Map a host platform identifier to a platform family.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.eq_ignore_ascii_case("win32")
            || id.eq_ignore_ascii_case("windows")
            || id.eq_ignore_ascii_case("win")
        {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether paths and quoting follow Windows rules.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_windows_aliases() {
        assert_eq!(Platform::from_id("win32"), Platform::Windows);
        assert_eq!(Platform::from_id("Windows"), Platform::Windows);
        assert_eq!(Platform::from_id(" win "), Platform::Windows);
    }

    #[test]
    fn test_from_id_everything_else_is_posix() {
        assert_eq!(Platform::from_id("linux"), Platform::Posix);
        assert_eq!(Platform::from_id("darwin"), Platform::Posix);
        assert_eq!(Platform::from_id(""), Platform::Posix);
    }
}
