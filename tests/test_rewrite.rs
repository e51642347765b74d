mod common;

use std::fs;

use common::{code, run_in, stderr, stdout};

const QUIZ_DATA: &str = "window.htmlQuizData_05 = {\n  prev: \"04-semantic-quiz.html\",\n  next: \"06-forms-basic-quiz.html\",\n};\n";

#[test]
fn rewrite_migrates_links_once() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("quiz-05.js");
    fs::write(&file, QUIZ_DATA).unwrap();

    let first = run_in(dir.path(), &["-q", "rewrite"]);
    assert_eq!(code(&first), 0, "stderr: {}", stderr(&first));
    assert!(stdout(&first).contains("updated 1 file(s), skipped 0, failed 0"));

    let migrated = fs::read_to_string(&file).unwrap();
    assert!(migrated.contains(r#"prev: "quiz.html?chapter=04""#));
    assert!(migrated.contains(r#"next: "quiz.html?chapter=06""#));

    let second = run_in(dir.path(), &["-q", "rewrite"]);
    assert_eq!(code(&second), 0);
    assert!(stdout(&second).contains("updated 0 file(s), skipped 1, failed 0"));
    assert_eq!(fs::read_to_string(&file).unwrap(), migrated);
}

#[test]
fn rewrite_only_touches_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quiz-05.js"), QUIZ_DATA).unwrap();
    fs::write(dir.path().join("deep-14-01.js"), QUIZ_DATA).unwrap();

    let output = run_in(dir.path(), &["-q", "rewrite", "--dir", "."]);
    assert_eq!(code(&output), 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("deep-14-01.js")).unwrap(),
        QUIZ_DATA
    );
}

#[test]
fn rewrite_with_custom_pattern() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("deep-14-01.js"), QUIZ_DATA).unwrap();

    let output = run_in(dir.path(), &["-q", "rewrite", "--pattern", "deep-*.js"]);
    assert_eq!(code(&output), 0);
    assert!(
        fs::read_to_string(dir.path().join("deep-14-01.js"))
            .unwrap()
            .contains("quiz.html?chapter=04")
    );
}

#[test]
fn dry_run_leaves_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("quiz-05.js");
    fs::write(&file, QUIZ_DATA).unwrap();

    let output = run_in(dir.path(), &["-q", "rewrite", "--dry-run"]);
    assert_eq!(code(&output), 0);
    assert!(stdout(&output).contains("would update 1 file(s)"));
    assert_eq!(fs::read_to_string(&file).unwrap(), QUIZ_DATA);
}

#[test]
fn undecodable_file_fails_alone() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quiz-01.js"), [0xff, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("quiz-05.js"), QUIZ_DATA).unwrap();

    let output = run_in(dir.path(), &["-q", "rewrite"]);
    assert_eq!(code(&output), 0);
    let out = stdout(&output);
    assert!(out.contains("✗ failed: quiz-01.js"), "{out}");
    assert!(out.contains("updated 1 file(s), skipped 0, failed 1"), "{out}");

    let strict = run_in(dir.path(), &["-q", "rewrite", "--strict"]);
    assert_eq!(code(&strict), 4);
}

#[test]
fn empty_directory_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-q", "rewrite"]);
    assert_eq!(code(&output), 0);
    assert!(stdout(&output).starts_with("no files matching quiz-*.js"));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-q", "rewrite", "--dir", "absent"]);
    assert_eq!(code(&output), 3);
}

#[test]
fn invalid_pattern_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["-q", "rewrite", "--pattern", "quiz-[.js"]);
    assert_eq!(code(&output), 64);
}
