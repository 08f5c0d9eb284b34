use anyhow::{bail, Result};
use clap::Args;

use repl_runner::{
    config::Config,
    launch::{plan, LaunchOutcome, LaunchRequest},
    precheck::{probe_for, Lookup},
    WindowsMode,
};

use super::context::{folder_choices, ContextArgs};

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub context: ContextArgs,

    /// Profile id; optional when exactly one profile is configured
    #[arg(long)]
    pub profile: Option<String>,

    /// Windows handling; overrides windows.mode
    #[arg(long)]
    pub windows_mode: Option<WindowsMode>,

    /// Check that the command resolves; overrides precheck.enabled
    #[arg(long)]
    pub precheck: bool,

    /// Lookup strategy for the precheck; overrides precheck.lookup
    #[arg(long)]
    pub lookup: Option<Lookup>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let config = Config::load()?;
    let profile = config.profile(args.profile.as_deref())?;
    let ctx = &args.context;
    let folders = ctx.workspace_folders();
    let editor = ctx.editor();
    let platform = ctx.platform();

    let req = LaunchRequest {
        spec: profile.spec(),
        terminal_name: profile.terminal_name().to_string(),
        cwd_mode: ctx.mode(&config),
        folders: &folders,
        editor: editor.as_ref(),
        remember_selection: ctx.remember_selection(&config),
        remembered: ctx.remembered.as_deref(),
        platform,
        windows_mode: args.windows_mode.unwrap_or(config.windows.mode),
        precheck: args.precheck || config.precheck.enabled,
    };
    let probe = probe_for(args.lookup.unwrap_or(config.precheck.lookup), platform);
    let outcome = plan(&req, probe.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        LaunchOutcome::Ready(plan) => {
            if let Some(cwd) = &plan.cwd {
                eprintln!("cwd: {}", cwd.display());
            }
            eprintln!("terminal: {}", plan.terminal_name);
            println!("{}", plan.command_line);
            Ok(())
        }
        LaunchOutcome::NeedsPrompt { .. } => bail!(
            "Several folders are open; choose one and pass it with --remembered:\n{}",
            folder_choices(&folders)
        ),
        LaunchOutcome::Blocked { reason } => bail!(reason),
        LaunchOutcome::NotFound { base } => bail!("Command not found: {base}"),
    }
}
