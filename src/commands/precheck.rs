use anyhow::{bail, Result};
use repl_runner::{
    config::Config,
    precheck::{precheck_binary, probe_for, Lookup},
};

use super::context::platform_or_current;

pub fn cmd_precheck(platform: Option<&str>, lookup: Option<Lookup>, command: &str) -> Result<()> {
    let lookup = match lookup {
        Some(lookup) => lookup,
        None => Config::load()?.precheck.lookup,
    };
    let probe = probe_for(lookup, platform_or_current(platform));
    let result = precheck_binary(command, probe.as_ref());
    if !result.ok {
        bail!("Command not found: {}", result.base);
    }
    eprintln!("Found {}", result.base);
    Ok(())
}
