use std::fs;
use std::path::Path;

use mhtml2md::batch::convert_directory;
use mhtml2md::{Error, Options};

fn archive(body: &str) -> String {
    format!(
        "Content-Type: multipart/related; boundary=\"B\"\n\n\
--B\nContent-Type: text/html\n\n<html><body>{body}</body></html>\n--B--\n"
    )
}

fn populate(dir: &Path) {
    fs::write(
        dir.join("first.mhtml"),
        archive("<main><h1>First Page</h1><p>Alpha content.</p></main>"),
    )
    .expect("write first");
    fs::write(
        dir.join("second.mhtml"),
        archive("<main><p>Beta content without heading.</p></main>"),
    )
    .expect("write second");
    fs::write(
        dir.join("broken.mhtml"),
        "Content-Type: text/plain\n\nnothing to see",
    )
    .expect("write broken");
    fs::write(dir.join("readme.txt"), "not an archive").expect("write readme");
}

#[test]
fn batch_converts_good_files_and_reports_bad_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    populate(dir.path());

    let mut out = Vec::new();
    let report = convert_directory(dir.path(), &Options::default(), &mut out).expect("batch run");

    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.total(), 3);
    assert!(matches!(report.failed[0].1, Error::NotExtractable));

    let first = fs::read_to_string(dir.path().join("first.md")).expect("first.md");
    assert_eq!(first, "# First Page\n\nAlpha content.");
    let second = fs::read_to_string(dir.path().join("second.md")).expect("second.md");
    assert_eq!(second, "# second\n\nBeta content without heading.");
    assert!(!dir.path().join("broken.md").exists());
    assert!(!dir.path().join("readme.md").exists());
}

#[test]
fn progress_lines_follow_sorted_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    populate(dir.path());

    let mut out = Vec::new();
    convert_directory(dir.path(), &Options::default(), &mut out).expect("batch run");
    let progress = String::from_utf8(out).expect("utf-8 progress");

    let expected = "\
Converting broken.mhtml...
  Could not extract HTML content from broken.mhtml
Converting first.mhtml...
  Created first.md
Converting second.mhtml...
  Created second.md
Conversion complete!
";
    assert_eq!(progress, expected);
}

#[test]
fn rerunning_overwrites_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    populate(dir.path());
    fs::write(dir.path().join("first.md"), "stale").expect("write stale");

    let mut out = Vec::new();
    convert_directory(dir.path(), &Options::default(), &mut out).expect("first run");
    let once = fs::read_to_string(dir.path().join("first.md")).expect("first.md");
    convert_directory(dir.path(), &Options::default(), &mut out).expect("second run");
    let twice = fs::read_to_string(dir.path().join("first.md")).expect("first.md");

    assert_ne!(once, "stale");
    assert_eq!(once, twice);
}

#[test]
fn empty_directory_only_reports_completion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut out = Vec::new();
    let report = convert_directory(dir.path(), &Options::default(), &mut out).expect("batch run");
    assert_eq!(report.total(), 0);
    assert_eq!(String::from_utf8(out).expect("utf-8"), "Conversion complete!\n");
}

#[test]
fn custom_input_extension_is_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("page.mht"),
        archive("<main><h1>Short Form</h1><p>Other extension.</p></main>"),
    )
    .expect("write mht");
    populate(dir.path());

    let options = Options {
        input_extension: "mht".to_string(),
        ..Options::default()
    };
    let mut out = Vec::new();
    let report = convert_directory(dir.path(), &options, &mut out).expect("batch run");
    assert_eq!(report.converted, vec![dir.path().join("page.md")]);
}

#[test]
fn invalid_directory_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").expect("write");

    let mut out = Vec::new();
    let err = convert_directory(&file, &Options::default(), &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidDirectory(_)));
    assert!(out.is_empty());
}
