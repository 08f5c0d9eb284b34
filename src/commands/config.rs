use anyhow::Result;
use clap::Subcommand;
use repl_runner::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration; refuses to replace an existing file
    Init {
        /// Overwrite an existing config, discarding its profiles
        #[arg(long)]
        force: bool,
    },
    /// Set a configuration value (e.g. cwd.mode activeWorkspace)
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let path = Config::path()?;
            let config = Config::load_from(&path)?;
            if !path.exists() {
                eprintln!("No config at {}; showing defaults", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init { force } => {
            let path = Config::init(force)?;
            eprintln!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let path = Config::path()?;
            let mut config = Config::load_from(&path)?;
            config.set_value(&key, &value)?;
            config.save_to(&path)?;
            // echo the parsed value so `WSL` shows up as `wsl`
            println!("{key} = {}", config.get_value(&key)?);
        }
        ConfigAction::Get { key } => println!("{}", Config::load()?.get_value(&key)?),
    }
    Ok(())
}
