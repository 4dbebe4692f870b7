// tests/scan.rs
// End-to-end scan pipeline tests over temp directories

use std::fs;
use std::path::Path;

use docscan::report::render;
use docscan::{Entity, FileReport, Scanner};

fn scan(dir: &Path) -> Vec<FileReport> {
    Scanner::new(dir).scan().expect("scan should succeed")
}

fn find<'a>(reports: &'a [FileReport], file_name: &str) -> Option<&'a FileReport> {
    reports
        .iter()
        .find(|r| r.path.file_name().unwrap() == file_name)
}

#[test]
fn empty_directory_renders_only_the_sentinel() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let reports = scan(dir.path());

    assert!(reports.is_empty());
    assert_eq!(render(&reports), "\nAll done!\n");
}

#[test]
fn collects_entities_and_skips_the_initializer() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("a.py"),
        "class Foo:\n    \"\"\"Does a thing.\"\"\"\n    pass\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.py"), "def bar():\n    pass\n").unwrap();
    fs::write(dir.path().join("__init__.py"), "class Ignored: pass\n").unwrap();

    let reports = scan(dir.path());

    assert_eq!(reports.len(), 2);
    assert!(find(&reports, "__init__.py").is_none());

    let a = find(&reports, "a.py").expect("a.py reported");
    assert_eq!(
        a.classes,
        vec![Entity {
            name: "Foo".to_string(),
            doc: Some("Does a thing.".to_string()),
        }]
    );
    assert!(a.functions.is_empty());

    let b = find(&reports, "b.py").expect("b.py reported");
    assert!(b.classes.is_empty());
    assert_eq!(
        b.functions,
        vec![Entity {
            name: "bar".to_string(),
            doc: None,
        }]
    );
}

#[test]
fn syntax_error_file_is_excluded() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("bad.py"), "def bad(:\n").unwrap();
    fs::write(dir.path().join("ok.py"), "def ok():\n    pass\n").unwrap();

    let reports = scan(dir.path());

    assert_eq!(reports.len(), 1);
    assert!(find(&reports, "bad.py").is_none());
    assert!(find(&reports, "ok.py").is_some());
}

#[test]
fn suffix_mismatch_never_appears_regardless_of_content() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("notes.txt"), "def looks_like_code(): pass\n").unwrap();
    fs::write(dir.path().join("data.pyc"), "class NotSource: pass\n").unwrap();

    let reports = scan(dir.path());

    assert!(reports.is_empty());
}

#[test]
fn file_without_definitions_is_absent_even_when_it_parses() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("constants.py"), "VALUE = 42\nNAMES = []\n").unwrap();

    let reports = scan(dir.path());

    assert!(reports.is_empty());
}

#[test]
fn nesting_does_not_affect_collection() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("nested.py"),
        "\
def outer():
    class Inside:
        \"\"\"Defined inside a function.\"\"\"

        def method(self):
            pass
",
    )
    .unwrap();

    let reports = scan(dir.path());
    let report = find(&reports, "nested.py").expect("nested.py reported");

    assert_eq!(report.classes.len(), 1);
    assert_eq!(report.classes[0].name, "Inside");
    assert_eq!(
        report.classes[0].doc,
        Some("Defined inside a function.".to_string())
    );

    let function_names: Vec<&str> = report.functions.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(function_names, vec!["outer", "method"]);
}

#[test]
fn subdirectories_are_walked_recursively() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(dir.path().join("pkg/sub")).unwrap();
    fs::write(
        dir.path().join("pkg/sub/deep.py"),
        "def buried():\n    pass\n",
    )
    .unwrap();

    let reports = scan(dir.path());

    let report = find(&reports, "deep.py").expect("deep.py reported");
    assert_eq!(report.functions[0].name, "buried");
    assert!(report.path.starts_with(dir.path()));
}

#[test]
fn rendered_report_matches_the_contract() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("single.py"),
        "class Widget:\n    \"\"\"A widget.\n\n    With details.\n    \"\"\"\n\ndef make():\n    pass\n",
    )
    .unwrap();

    let reports = scan(dir.path());
    let text = render(&reports);

    let path = dir.path().join("single.py");
    assert_eq!(
        text,
        format!(
            "\nFile: {}\n\
             Classes:\n\
             \x20 Widget - A widget. With details.\n\
             Functions:\n\
             \x20 make\n\
             \nAll done!\n",
            path.display()
        )
    );
}

#[test]
fn missing_root_aborts_the_run() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nowhere");

    assert!(Scanner::new(&missing).scan().is_err());
}
