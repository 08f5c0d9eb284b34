//! Typed errors for mode and strategy parsing.

use thiserror::Error;

/// Errors raised while turning host-supplied strings into typed settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The cwd mode is not one of `workspaceRoot`, `activeWorkspace`,
    /// `activeFileDir` or `prompt`.
    #[error("Unknown cwd mode: {0} (expected workspaceRoot, activeWorkspace, activeFileDir or prompt)")]
    UnknownCwdMode(String),

    /// The Windows handling mode is not one of `block`, `wsl` or `native`.
    #[error("Unknown windows mode: {0} (expected block, wsl or native)")]
    UnknownWindowsMode(String),

    /// The binary lookup strategy is not one of `which` or `shell`.
    #[error("Unknown lookup strategy: {0} (expected which or shell)")]
    UnknownLookup(String),
}

/// Convenience alias used by the parsing helpers.
pub type Result<T> = std::result::Result<T, Error>;
