//! Turning a base command and raw profile arguments into one command line.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::platform::Platform;

mod lexer;
mod quote;

#[cfg(test)]
mod tests;

pub use lexer::{tokenize_args, tokenize_with, ArgLexer, FlagSplitLexer, ShellWordsLexer};
pub use quote::{
    is_flag, quote_arg, quote_posix_minimal, quote_windows, quoter_for, PosixMinimal, Quoter,
    ShellWords, WindowsDouble,
};

static INLINE_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+-{1,2}\S").unwrap());

/// A program plus its raw arguments.
///
/// Arguments may be composite (`"-p brain"`); they are split into logical
/// arguments only when the command line is built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Executable or shell command, e.g. `codex` or `python3`.
    pub base: String,
    /// Raw arguments in order.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from a base and any iterable of arguments.
    #[must_use]
    pub fn new<I, S>(base: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The final command line for `platform`. See [`build_final_command`].
    #[must_use]
    pub fn command_line(&self, platform: Platform) -> String {
        build_final_command(self, platform)
    }
}

/// True when `base` carries its own flags (`codex -p brain`).
///
/// Such flags bypass argument quoting; they belong in the profile's `args`.
#[must_use]
pub fn has_inline_flags(base: &str) -> bool {
    INLINE_FLAG.is_match(base)
}

/// Tokenize the spec's arguments and join them, quoted for `platform`,
/// after the base command.
///
/// POSIX output quotes only where needed (`codex -p 'my profile'`); Windows
/// output double-quotes every argument (`codex "-p" "brain"`). The base is
/// emitted verbatim.
#[must_use]
pub fn build_final_command(spec: &CommandSpec, platform: Platform) -> String {
    build_final_command_with(&ShellWordsLexer, spec, platform)
}

/// [`build_final_command`] with an explicit argument lexer.
#[must_use]
pub fn build_final_command_with<L>(lexer: &L, spec: &CommandSpec, platform: Platform) -> String
where
    L: ArgLexer + ?Sized,
{
    let tokens = tokenize_with(lexer, &spec.args);
    let quoted = quoter_for(platform).join(&tokens);
    format!("{} {}", spec.base, quoted).trim().to_string()
}
