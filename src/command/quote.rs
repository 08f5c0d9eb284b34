use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::platform::Platform;

static FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{1,2}\S+$").unwrap());
static POSIX_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_@%+=:,./-]+$").unwrap());

/// Renders logical arguments as shell text.
pub trait Quoter {
    /// Shell text for a single argument.
    fn quote<'a>(&self, token: &'a str) -> Cow<'a, str>;

    /// Shell text for a sequence of arguments, separated by single spaces.
    fn join(&self, tokens: &[String]) -> String {
        tokens
            .iter()
            .map(|t| self.quote(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// POSIX quoting that leaves flags and plain words untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixMinimal;

impl Quoter for PosixMinimal {
    fn quote<'a>(&self, token: &'a str) -> Cow<'a, str> {
        quote_posix_minimal(token)
    }
}

/// POSIX quoting as done by `shell-words`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellWords;

impl Quoter for ShellWords {
    fn quote<'a>(&self, token: &'a str) -> Cow<'a, str> {
        shell_words::quote(token)
    }
}

/// Windows quoting: every token double-quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsDouble;

impl Quoter for WindowsDouble {
    fn quote<'a>(&self, token: &'a str) -> Cow<'a, str> {
        Cow::Owned(quote_windows(token))
    }
}

/// The quoter used when building a final command line for `platform`.
#[must_use]
pub fn quoter_for(platform: Platform) -> &'static dyn Quoter {
    match platform {
        Platform::Posix => &PosixMinimal,
        Platform::Windows => &WindowsDouble,
    }
}

/// True for `-x`, `--long`, `--key=value` style tokens.
#[must_use]
pub fn is_flag(token: &str) -> bool {
    FLAG.is_match(token)
}

/// Quote `token` for a POSIX shell only when it needs it.
///
/// Flags and tokens made only of `[A-Za-z0-9_@%+=:,./-]` pass through.
/// Everything else is single-quoted, with embedded `'` written as `'\''`.
#[must_use]
pub fn quote_posix_minimal(token: &str) -> Cow<'_, str> {
    if is_flag(token) || POSIX_SAFE.is_match(token) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(single_quote(token))
}

/// Wrap `token` in double quotes, escaping embedded `"` as `\"`.
#[must_use]
pub fn quote_windows(token: &str) -> String {
    format!("\"{}\"", token.replace('"', "\\\""))
}

/// Quote a single argument for `platform`.
///
/// On POSIX this defers to `shell-words`; on Windows the token is always
/// double-quoted.
#[must_use]
pub fn quote_arg(arg: &str, platform: Platform) -> String {
    match platform {
        Platform::Posix => ShellWords.quote(arg).into_owned(),
        Platform::Windows => quote_windows(arg),
    }
}

fn single_quote(token: &str) -> String {
    format!("'{}'", token.replace('\'', r"'\''"))
}
