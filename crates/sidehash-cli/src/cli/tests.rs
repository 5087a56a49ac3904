use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

/// Source that hands back a fixed answer, for driving `run_with_source` without a terminal.
struct Fixed(Option<Collected>);

impl PathSource for Fixed {
    fn collect(&mut self) -> io::Result<Collected> {
        Ok(self.0.take().unwrap_or(Collected::Unavailable))
    }
}

fn run(source: Collected) -> String {
    let mut out = Vec::new();
    run_with_source(&Processor::default(), &mut Fixed(Some(source)), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn cli_parse_paths() {
    let cli = parse(&["sidehash", "a.pdf", "b c.png"]);
    assert_eq!(cli.paths, vec![PathBuf::from("a.pdf"), PathBuf::from("b c.png")]);
    assert!(cli.algorithm.is_none());
    assert!(cli.chunk_size.is_none());
}

#[test]
fn cli_parse_no_args() {
    let cli = parse(&["sidehash"]);
    assert!(cli.paths.is_empty());
}

#[test]
fn cli_parse_algorithm_and_chunk_size() {
    let cli = parse(&["sidehash", "-a", "sha256", "--chunk-size", "65536", "x.iso"]);
    assert_eq!(cli.algorithm, Some(Algorithm::Sha256));
    assert_eq!(cli.chunk_size, Some(65536));
    assert_eq!(cli.paths, vec![PathBuf::from("x.iso")]);
}

#[test]
fn cli_parse_rejects_bad_values() {
    assert!(Cli::try_parse_from(["sidehash", "--algorithm", "crc32", "x"]).is_err());
    assert!(Cli::try_parse_from(["sidehash", "--chunk-size", "0", "x"]).is_err());
    assert!(Cli::try_parse_from(["sidehash", "--chunk-size", "-5", "x"]).is_err());
}

#[cfg(unix)]
#[test]
fn cli_parse_accepts_non_utf8_paths() {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::OsStrExt;

    let bad = OsStr::from_bytes(b"bad\xff.txt");
    let cli = Cli::try_parse_from([
        OsString::from("sidehash"),
        OsString::from("good.txt"),
        bad.to_os_string(),
    ])
    .unwrap();
    assert_eq!(cli.paths, vec![PathBuf::from("good.txt"), PathBuf::from(bad)]);
}

#[test]
fn cli_overrides_config() {
    let cfg = SidehashConfig {
        algorithm: Algorithm::Blake3,
        chunk_size: 1024,
    };
    let p = parse(&["sidehash", "f"]).processor(&cfg);
    assert_eq!(p.algorithm(), Algorithm::Blake3);
    assert_eq!(p.chunk_size(), 1024);

    let p = parse(&["sidehash", "-a", "md5", "--chunk-size", "7", "f"]).processor(&cfg);
    assert_eq!(p.algorithm(), Algorithm::Md5);
    assert_eq!(p.chunk_size(), 7);
}

#[test]
fn unavailable_source_prints_usage() {
    let text = run(Collected::Unavailable);
    assert!(text.starts_with("usage: sidehash"));
}

#[test]
fn empty_selection_reports_nothing_selected() {
    assert_eq!(run(Collected::Paths(Vec::new())), "no files selected.\n");
}

#[test]
fn paths_are_processed_and_summarized() {
    let dir = tempfile::tempdir().unwrap();
    let f = dir.path().join("doc.pdf");
    std::fs::write(&f, b"abc").unwrap();
    let text = run(Collected::Paths(vec![
        f.into_os_string(),
        dir.path().join("nope").into_os_string(),
    ]));
    assert!(text.contains("✓ doc.pdf -> doc.pdf.md5 (900150983cd24fb0d6963f7d28e17f72)"));
    assert!(text.contains("error: file does not exist"));
    assert!(text.contains("done: 1 of 2 digest file(s) written"));
}
