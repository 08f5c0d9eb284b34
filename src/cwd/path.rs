use std::path::{Path, PathBuf};

use crate::platform::Platform;

/// Lexically normalize `path` into a comparison key.
///
/// `.` and empty components are dropped and `..` pops the previous
/// component. On Windows backslashes become `/` and ASCII letters are
/// lowercased so `C:\Work` and `c:/work/` compare equal.
pub(crate) fn normalize(path: &Path, platform: Platform) -> String {
    let raw = path.to_string_lossy();
    let raw = if platform.is_windows() {
        raw.replace('\\', "/").to_ascii_lowercase()
    } else {
        raw.into_owned()
    };
    let absolute = raw.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for part in raw.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                // never climb above a drive prefix such as `c:`
                Some(last) if *last != ".." && !(parts.len() == 1 && last.ends_with(':')) => {
                    parts.pop();
                }
                Some(last) if last.ends_with(':') => {}
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// True when `file` is `folder` itself or lies beneath it.
///
/// The prefix must end on a component boundary: `/a/bc` does not contain
/// `/a/bcd/x`.
pub(crate) fn is_within(file: &Path, folder: &Path, platform: Platform) -> bool {
    let file = normalize(file, platform);
    let folder = normalize(folder, platform);
    if file == folder {
        return true;
    }
    let with_sep = if folder.ends_with('/') {
        folder
    } else {
        format!("{folder}/")
    };
    file.starts_with(&with_sep)
}

/// Directory that holds `file`, or `None` when it has no parent component.
pub(crate) fn parent_dir(file: &Path, platform: Platform) -> Option<PathBuf> {
    if !platform.is_windows() {
        return file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf);
    }

    // Windows paths may be handled on a POSIX host, so split by hand.
    let raw = file.to_string_lossy();
    let idx = raw.rfind(['/', '\\'])?;
    let head = &raw[..idx];
    let parent = if head.is_empty() || (head.len() == 2 && head.ends_with(':')) {
        // keep the root separator: `\x` -> `\`, `C:\x` -> `C:\`
        &raw[..=idx]
    } else {
        head
    };
    Some(PathBuf::from(parent))
}
