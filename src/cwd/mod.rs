//! Working-directory resolution from workspace folders and the active editor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::platform::Platform;

pub(crate) mod path;

#[cfg(test)]
mod tests;

/// Policy used to pick the working directory for a launched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CwdMode {
    /// Always the first open folder.
    #[default]
    WorkspaceRoot,
    /// The most specific folder containing the active file.
    ActiveWorkspace,
    /// The directory of the active file.
    ActiveFileDir,
    /// Ask the user when several folders are open.
    Prompt,
}

impl CwdMode {
    /// The identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceRoot => "workspaceRoot",
            Self::ActiveWorkspace => "activeWorkspace",
            Self::ActiveFileDir => "activeFileDir",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for CwdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CwdMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "workspaceRoot" => Ok(Self::WorkspaceRoot),
            "activeWorkspace" => Ok(Self::ActiveWorkspace),
            "activeFileDir" => Ok(Self::ActiveFileDir),
            "prompt" => Ok(Self::Prompt),
            other => Err(Error::UnknownCwdMode(other.to_string())),
        }
    }
}

/// A root directory open in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    /// Display name, if the host gave the folder one.
    pub name: Option<String>,
    /// Absolute filesystem path.
    pub path: PathBuf,
}

impl WorkspaceFolder {
    /// Folder without a display name.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    /// Folder with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
        }
    }

    /// Name to show in a folder picker: the display name, or the last
    /// component of the path.
    #[must_use]
    pub fn label(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let raw = self.path.to_string_lossy();
        raw.trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
            .map_or_else(|| raw.to_string(), str::to_string)
    }
}

/// The document focused in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContext {
    /// URI scheme; `file` for documents backed by the filesystem, something
    /// like `untitled` for unsaved buffers.
    pub scheme: String,
    /// Filesystem path, meaningful only for the `file` scheme.
    pub path: Option<PathBuf>,
}

impl EditorContext {
    /// Context for a file on disk.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            scheme: "file".to_string(),
            path: Some(path.into()),
        }
    }

    /// Context for a buffer that has no filesystem path.
    #[must_use]
    pub fn virtual_buffer(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            path: None,
        }
    }

    /// The path of the document when it is a real file.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        if self.scheme == "file" {
            self.path.as_deref()
        } else {
            None
        }
    }
}

/// Inputs to [`resolve_cwd`].
#[derive(Debug, Clone)]
pub struct CwdRequest<'a> {
    /// Resolution policy.
    pub mode: CwdMode,
    /// Open folders in host order.
    pub folders: &'a [WorkspaceFolder],
    /// Active document, if any.
    pub editor: Option<&'a EditorContext>,
    /// Whether a previous pick may be reused in `prompt` mode. Defaults to `true`.
    pub remember_selection: bool,
    /// Folder the user picked last time, as persisted by the host.
    pub remembered: Option<&'a Path>,
    /// Decides path comparison rules.
    pub platform: Platform,
}

impl<'a> CwdRequest<'a> {
    /// Request with default options: remembering enabled, no editor, no
    /// remembered selection, current platform.
    #[must_use]
    pub fn new(mode: CwdMode, folders: &'a [WorkspaceFolder]) -> Self {
        Self {
            mode,
            folders,
            editor: None,
            remember_selection: true,
            remembered: None,
            platform: Platform::current(),
        }
    }
}

/// Outcome of [`resolve_cwd`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CwdResolution {
    /// Resolved working directory; `None` when no folder is open or a
    /// prompt is required.
    pub cwd: Option<PathBuf>,
    /// The host must ask the user to choose among the open folders.
    pub needs_prompt: bool,
}

impl CwdResolution {
    fn resolved(cwd: Option<PathBuf>) -> Self {
        Self {
            cwd,
            needs_prompt: false,
        }
    }

    fn prompt() -> Self {
        Self {
            cwd: None,
            needs_prompt: true,
        }
    }
}

/// Pick a working directory according to `req.mode`.
#[must_use]
pub fn resolve_cwd(req: &CwdRequest<'_>) -> CwdResolution {
    let first = req.folders.first().map(|f| f.path.clone());
    let file = req.editor.and_then(EditorContext::file_path);

    let resolution = match req.mode {
        CwdMode::WorkspaceRoot => CwdResolution::resolved(first),
        CwdMode::ActiveWorkspace => {
            let matched = file.and_then(|f| find_folder_for_file(req.folders, f, req.platform));
            CwdResolution::resolved(matched.map(Path::to_path_buf).or(first))
        }
        CwdMode::ActiveFileDir => {
            let dir = file.and_then(|f| path::parent_dir(f, req.platform));
            CwdResolution::resolved(dir.or(first))
        }
        CwdMode::Prompt => resolve_prompt(req, first),
    };

    tracing::debug!(
        mode = %req.mode,
        folders = req.folders.len(),
        cwd = ?resolution.cwd,
        needs_prompt = resolution.needs_prompt,
        "resolved working directory"
    );
    resolution
}

fn resolve_prompt(req: &CwdRequest<'_>, first: Option<PathBuf>) -> CwdResolution {
    if req.folders.len() <= 1 {
        return CwdResolution::resolved(first);
    }
    if req.remember_selection {
        if let Some(last) = req.remembered {
            let key = path::normalize(last, req.platform);
            let still_open = req
                .folders
                .iter()
                .any(|f| path::normalize(&f.path, req.platform) == key);
            if still_open {
                return CwdResolution::resolved(Some(last.to_path_buf()));
            }
            tracing::debug!(remembered = %last.display(), "remembered folder is no longer open");
        }
    }
    CwdResolution::prompt()
}

/// The most specific folder containing `file`. The first of equally long
/// matches wins.
fn find_folder_for_file<'f>(
    folders: &'f [WorkspaceFolder],
    file: &Path,
    platform: Platform,
) -> Option<&'f Path> {
    let mut best: Option<(&'f Path, usize)> = None;
    for folder in folders.iter().filter(|f| path::is_within(file, &f.path, platform)) {
        let len = path::normalize(&folder.path, platform).len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((folder.path.as_path(), len));
        }
    }
    best.map(|(p, _)| p)
}
