use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn objprint(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_objprint"))
        .args(args)
        .output()
        .expect("Failed to execute objprint")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "objprint failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("objprint output is not valid UTF-8")
}

const DOCUMENT: &str = r#"{
    "user": {"name": "Alexandra", "password": "hunter2"},
    "admin": {"name": "Root", "password": "toor"},
    "scores": [1.5, 2]
}"#;

#[test]
fn test_prints_document() {
    let input = json_file(DOCUMENT);
    let output = objprint(&[input.path().to_str().unwrap()]);

    assert_eq!(
        stdout_of(&output),
        "Object\n\
         \tadmin = Object\n\
         \t\tname = Root\n\
         \t\tpassword = toor\n\
         \tscores = Array\n\
         \t\t[0] = 1.5\n\
         \t\t[1] = 2\n\
         \tuser = Object\n\
         \t\tname = Alexandra\n\
         \t\tpassword = hunter2\n"
    );
}

#[test]
fn test_exclude_path_and_truncate() {
    let input = json_file(DOCUMENT);
    let output = objprint(&[
        input.path().to_str().unwrap(),
        "--exclude-path",
        "user.password",
        "--truncate",
        "4",
        "--culture",
        "de-DE",
    ]);

    let text = stdout_of(&output);
    assert!(!text.contains("hunter2"));
    assert!(text.contains("\t\tpassword = toor\n"));
    assert!(text.contains("\t\tname = Alex\n"));
    assert!(text.contains("[0] = 1,5\n"));
}

#[test]
fn test_profile_file() {
    let input = json_file(DOCUMENT);
    let profile = json_file(r#"{"exclude_paths": ["admin", "scores"], "max_depth": 8}"#);
    let output = objprint(&[
        input.path().to_str().unwrap(),
        "--profile",
        profile.path().to_str().unwrap(),
    ]);

    let text = stdout_of(&output);
    assert!(!text.contains("admin"));
    assert!(!text.contains("scores"));
    assert!(text.contains("user = Object\n"));
}

#[test]
fn test_depth_limit_fails() {
    let input = json_file(r#"{"a": {"b": {"c": {"d": 1}}}}"#);
    let output = objprint(&[input.path().to_str().unwrap(), "--max-depth", "2"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("depth limit"), "stderr was: {}", stderr);
}

#[test]
fn test_invalid_json_fails() {
    let input = json_file(r#"{"format_version":"#);
    let output = objprint(&[input.path().to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not valid JSON"));
}
