use regex::Regex;
use std::sync::LazyLock;

/// Splits one raw argument into the logical arguments it stands for.
pub trait ArgLexer {
    /// Logical arguments for `raw`, in order.
    fn split(&self, raw: &str) -> Vec<String>;
}

static FLAG_AND_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+([\s\S]+)$").unwrap());

/// Lexes arguments with POSIX shell word rules (`shell-words`).
///
/// `"-p brain"` becomes `-p` and `brain`; `"--name 'my app'"` becomes
/// `--name` and `my app`. Anything that does not start with a flag stays one
/// argument so values keep their embedded spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellWordsLexer;

impl ArgLexer for ShellWordsLexer {
    fn split(&self, raw: &str) -> Vec<String> {
        // `shell-words` drops an unquoted `#word` and the rest of the line as
        // a comment; such arguments are values, not comments.
        if starts_comment(raw) {
            return FlagSplitLexer.split(raw);
        }

        let tokens = match shell_words::split(raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::debug!(arg = raw, error = %e, "could not lex argument, splitting on first whitespace");
                return FlagSplitLexer.split(raw);
            }
        };

        match tokens.split_first() {
            Some((flag, rest)) if !rest.is_empty() && flag.starts_with('-') => {
                let mut out = vec![flag.clone()];
                let value = rest.join(" ");
                let value = value.trim();
                if !value.is_empty() {
                    out.push(value.to_string());
                }
                out
            }
            _ => vec![raw.to_string()],
        }
    }
}

/// True when some whitespace-delimited word of `raw` begins with `#`.
fn starts_comment(raw: &str) -> bool {
    raw.split_whitespace().any(|word| word.starts_with('#'))
}

/// Lexer without shell rules: a dash-leading argument containing whitespace
/// is split once, at its first run of whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagSplitLexer;

impl ArgLexer for FlagSplitLexer {
    fn split(&self, raw: &str) -> Vec<String> {
        if raw.starts_with('-') && raw.contains(char::is_whitespace) {
            if let Some(caps) = FLAG_AND_REST.captures(raw) {
                return vec![caps[1].to_string(), caps[2].to_string()];
            }
        }
        vec![raw.to_string()]
    }
}

/// Expand every raw argument with `lexer`.
#[must_use]
pub fn tokenize_with<L, S>(lexer: &L, args: &[S]) -> Vec<String>
where
    L: ArgLexer + ?Sized,
    S: AsRef<str>,
{
    args.iter()
        .flat_map(|a| lexer.split(a.as_ref()))
        .collect()
}

/// Expand every raw argument with [`ShellWordsLexer`].
#[must_use]
pub fn tokenize_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    tokenize_with(&ShellWordsLexer, args)
}
