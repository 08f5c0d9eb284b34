//! The full decision pipeline for one launch: working directory, Windows
//! adaptation, command line and optional precheck.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::command::{build_final_command, has_inline_flags, CommandSpec};
use crate::cwd::{resolve_cwd, CwdMode, CwdRequest, EditorContext, WorkspaceFolder};
use crate::platform::Platform;
use crate::precheck::{precheck_binary, BinaryProbe};
use crate::windows::{resolve_windows_command, WindowsDecision, WindowsMode};


/// Everything the host knows when the user asks to launch a command.
#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    /// Command to launch.
    pub spec: CommandSpec,
    /// Terminal to create or reuse.
    pub terminal_name: String,
    /// Working-directory policy.
    pub cwd_mode: CwdMode,
    /// Open folders in host order.
    pub folders: &'a [WorkspaceFolder],
    /// Active document, if any.
    pub editor: Option<&'a EditorContext>,
    /// Reuse the last picked folder in `prompt` mode.
    pub remember_selection: bool,
    /// Folder picked last time.
    pub remembered: Option<&'a Path>,
    /// Host platform.
    pub platform: Platform,
    /// Windows handling.
    pub windows_mode: WindowsMode,
    /// Check that the command resolves before returning a plan.
    pub precheck: bool,
}

/// A launch that can go ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    /// Directory the terminal starts in; `None` leaves it to the host.
    pub cwd: Option<PathBuf>,
    /// Terminal to create or reuse.
    pub terminal_name: String,
    /// Literal text to send to the terminal.
    pub command_line: String,
}

/// Result of [`plan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LaunchOutcome {
    /// Send `command_line` to the terminal.
    Ready(LaunchPlan),
    /// Ask the user to pick one of `folders`, then plan again with the pick
    /// as the remembered selection.
    NeedsPrompt {
        /// Candidate folder paths.
        folders: Vec<PathBuf>,
    },
    /// Windows execution is blocked.
    Blocked {
        /// Message for the user.
        reason: String,
    },
    /// The precheck could not find the command.
    NotFound {
        /// The token that failed to resolve.
        base: String,
    },
}

/// Compose the cwd resolver, Windows adaptation, quoting and precheck.
#[must_use]
pub fn plan(req: &LaunchRequest<'_>, probe: &dyn BinaryProbe) -> LaunchOutcome {
    if has_inline_flags(&req.spec.base) {
        tracing::warn!(
            command = %req.spec.base,
            "command contains flags; move them to args for reliable quoting"
        );
    }

    let resolution = resolve_cwd(&CwdRequest {
        mode: req.cwd_mode,
        folders: req.folders,
        editor: req.editor,
        remember_selection: req.remember_selection,
        remembered: req.remembered,
        platform: req.platform,
    });
    if resolution.needs_prompt {
        return LaunchOutcome::NeedsPrompt {
            folders: req.folders.iter().map(|f| f.path.clone()).collect(),
        };
    }

    let spec = match resolve_windows_command(req.platform, req.windows_mode, req.spec.clone()) {
        WindowsDecision::Blocked { reason } => return LaunchOutcome::Blocked { reason },
        WindowsDecision::Proceed(spec) => spec,
    };

    if req.precheck {
        let result = precheck_binary(&spec.base, probe);
        if !result.ok {
            return LaunchOutcome::NotFound { base: result.base };
        }
    }

    LaunchOutcome::Ready(LaunchPlan {
        cwd: resolution.cwd,
        terminal_name: req.terminal_name.clone(),
        command_line: build_final_command(&spec, req.platform),
    })
}
