use anyhow::Result;
use repl_runner::config::Config;

pub fn cmd_profiles() -> Result<()> {
    let config = Config::load()?;
    if config.profiles.is_empty() {
        eprintln!("No profiles configured. Add a [[profiles]] entry to {}", Config::path()?.display());
        return Ok(());
    }
    for profile in &config.profiles {
        let args = if profile.args.is_empty() {
            String::new()
        } else {
            format!(" {}", profile.args.join(" "))
        };
        println!("{}\t{}\t{}{}", profile.id, profile.label, profile.command, args);
    }
    Ok(())
}
