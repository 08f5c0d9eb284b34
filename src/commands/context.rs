use clap::Args;
use std::path::PathBuf;

use repl_runner::{config::Config, CwdMode, EditorContext, Platform, WorkspaceFolder};

/// Editor state normally supplied by the host.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Open workspace folder; repeat in host order
    #[arg(long = "folder", value_name = "PATH")]
    pub folders: Vec<PathBuf>,

    /// Path of the active document
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// URI scheme of the active document
    #[arg(long, default_value = "file")]
    pub scheme: String,

    /// Working-directory policy; overrides cwd.mode
    #[arg(long)]
    pub mode: Option<CwdMode>,

    /// Folder picked last time
    #[arg(long)]
    pub remembered: Option<PathBuf>,

    /// Ignore the remembered folder; overrides cwd.remember_selection
    #[arg(long)]
    pub no_remember: bool,

    /// Host platform identifier (win32, linux, darwin, ...)
    #[arg(long)]
    pub platform: Option<String>,
}

impl ContextArgs {
    pub fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        self.folders.iter().cloned().map(WorkspaceFolder::new).collect()
    }

    pub fn editor(&self) -> Option<EditorContext> {
        self.file.as_ref().map(|path| EditorContext {
            scheme: self.scheme.clone(),
            path: Some(path.clone()),
        })
    }

    pub fn mode(&self, config: &Config) -> CwdMode {
        self.mode.unwrap_or(config.cwd.mode)
    }

    pub fn remember_selection(&self, config: &Config) -> bool {
        !self.no_remember && config.cwd.remember_selection
    }

    pub fn platform(&self) -> Platform {
        platform_or_current(self.platform.as_deref())
    }
}

pub fn platform_or_current(id: Option<&str>) -> Platform {
    id.map_or_else(Platform::current, Platform::from_id)
}

/// Lines shown when the user has to pick a folder.
pub fn folder_choices(folders: &[WorkspaceFolder]) -> String {
    folders
        .iter()
        .map(|f| format!("  {}  {}", f.label(), f.path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
