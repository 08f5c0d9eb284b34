use anyhow::{bail, Result};
use repl_runner::{config::Config, resolve_cwd, CwdRequest};

use super::context::{folder_choices, ContextArgs};

pub fn cmd_cwd(args: &ContextArgs) -> Result<()> {
    let config = Config::load()?;
    let folders = args.workspace_folders();
    let editor = args.editor();

    let resolution = resolve_cwd(&CwdRequest {
        mode: args.mode(&config),
        folders: &folders,
        editor: editor.as_ref(),
        remember_selection: args.remember_selection(&config),
        remembered: args.remembered.as_deref(),
        platform: args.platform(),
    });

    if resolution.needs_prompt {
        bail!(
            "Several folders are open; choose one and pass it with --remembered:\n{}",
            folder_choices(&folders)
        );
    }
    match resolution.cwd {
        Some(cwd) => println!("{}", cwd.display()),
        None => eprintln!("No workspace folder open; the terminal keeps its default directory"),
    }
    Ok(())
}
