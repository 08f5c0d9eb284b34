use repl_runner::{build_final_command, CommandSpec};

use super::context::platform_or_current;

pub fn cmd_quote(platform: Option<&str>, base: String, args: Vec<String>) {
    let spec = CommandSpec { base, args };
    println!("{}", build_final_command(&spec, platform_or_current(platform)));
}
