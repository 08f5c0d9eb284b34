//! Decide where and how a configured REPL or CLI tool is launched in an
//! editor terminal: the working directory, the quoted command line, Windows
//! handling and an optional check that the binary exists.

pub mod command;
pub mod config;
pub mod cwd;
pub mod error;
pub mod launch;
pub mod platform;
pub mod precheck;
pub mod windows;

pub use command::{build_final_command, CommandSpec};
pub use config::Config;
pub use cwd::{resolve_cwd, CwdMode, CwdRequest, CwdResolution, EditorContext, WorkspaceFolder};
pub use error::Error;
pub use launch::{plan, LaunchOutcome, LaunchPlan, LaunchRequest};
pub use platform::Platform;
pub use precheck::{precheck_binary, BinaryProbe, PrecheckResult};
pub use windows::{resolve_windows_command, WindowsDecision, WindowsMode};
