//! Raw path input cleanup.
//!
//! Paths dropped onto a terminal or pasted from a file manager often arrive
//! padded with whitespace and wrapped in quotes. Names need not be UTF-8.

use std::ffi::OsStr;

const QUOTES: [char; 2] = ['"', '\''];

/// Trim surrounding whitespace, then strip one leading and one trailing quote character.
pub fn normalize_path(raw: &OsStr) -> &OsStr {
    match raw.to_str() {
        Some(s) => OsStr::new(normalize_str(s)),
        None => normalize_non_utf8(raw),
    }
}

fn normalize_str(raw: &str) -> &str {
    let s = raw.trim();
    let s = s.strip_prefix(&QUOTES[..]).unwrap_or(s);
    s.strip_suffix(&QUOTES[..]).unwrap_or(s)
}

/// Byte-level variant: only ASCII whitespace and quotes are stripped.
#[cfg(unix)]
fn normalize_non_utf8(raw: &OsStr) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;

    let is_quote = |b: &u8| *b == b'"' || *b == b'\'';
    let mut s = raw.as_bytes().trim_ascii();
    if let Some((first, rest)) = s.split_first() {
        if is_quote(first) {
            s = rest;
        }
    }
    if let Some((last, rest)) = s.split_last() {
        if is_quote(last) {
            s = rest;
        }
    }
    OsStr::from_bytes(s)
}

// Non-UTF-8 names outside unix (unpaired surrogates on Windows) are passed through untouched.
#[cfg(not(unix))]
fn normalize_non_utf8(raw: &OsStr) -> &OsStr {
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> &str {
        normalize_path(OsStr::new(s)).to_str().unwrap()
    }

    #[test]
    fn strips_whitespace_and_double_quotes() {
        assert_eq!(norm(" \"path/to/file.txt\" "), "path/to/file.txt");
    }

    #[test]
    fn strips_single_quotes() {
        assert_eq!(norm("'/tmp/a b.iso'\n"), "/tmp/a b.iso");
    }

    #[test]
    fn plain_path_unchanged() {
        assert_eq!(norm("path/to/file.txt"), "path/to/file.txt");
    }

    #[test]
    fn only_one_layer_removed() {
        assert_eq!(norm("\"\"x\"\""), "\"x\"");
    }

    #[test]
    fn unbalanced_quote_stripped() {
        assert_eq!(norm("\"/tmp/x"), "/tmp/x");
    }

    #[test]
    fn empty_and_quote_only() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("\"\""), "");
        assert_eq!(norm("\""), "");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_trimmed_bytewise() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b" \"/tmp/bad\xff.txt\" ");
        assert_eq!(
            normalize_path(raw).as_bytes(),
            b"/tmp/bad\xff.txt".as_slice()
        );
        let bare = OsStr::from_bytes(b"bad\xff.txt");
        assert_eq!(normalize_path(bare), bare);
    }
}
