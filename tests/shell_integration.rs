use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn blotter(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("blotter").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_exit_on_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    blotter(temp_dir.path())
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Simple Blog ==="))
        .stdout(predicate::str::contains("8. Exit"));

    // Nothing was mutated, so nothing was written
    assert!(!temp_dir.path().join("blog.json").exists());
}

#[test]
fn test_create_comment_export_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();

    blotter(temp_dir.path())
        .write_stdin("1\nA\nbody\nalice\n4\n1\nbob\nnice\n7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Post created with ID: 1"))
        .stdout(predicate::str::contains("Comment added"))
        .stdout(predicate::str::contains("Blog exported to blog.html"));

    let html = fs::read_to_string(temp_dir.path().join("blog.html")).unwrap();
    assert!(html.contains("<div class=\"post-title\">A</div>"));
    assert!(html.contains("By alice on "));
    assert!(html.contains("bob"));
    assert!(html.contains("nice"));
    assert!(html.contains("Comments (1)"));

    let json = fs::read_to_string(temp_dir.path().join("blog.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["title"], "A");
    assert_eq!(value[0]["comments"][0]["author"], "bob");
}

#[test]
fn test_posts_survive_restart() {
    let temp_dir = tempfile::tempdir().unwrap();

    blotter(temp_dir.path())
        .write_stdin("1\nFirst\nhello world\nalice\n1\nSecond\nbye\ncarol\n8\n")
        .assert()
        .success();

    let output = blotter(temp_dir.path())
        .write_stdin("2\n8\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let second = stdout.find("Title: Second").unwrap();
    let first = stdout.find("Title: First").unwrap();
    assert!(second < first, "newest post should be listed first");
}

#[test]
fn test_search_and_invalid_choice() {
    let temp_dir = tempfile::tempdir().unwrap();

    blotter(temp_dir.path())
        .write_stdin("1\nGreeting\nhello world\nalice\n6\nHELLO\nnope\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1 - Greeting"))
        .stdout(predicate::str::contains("Invalid choice"));
}

#[test]
fn test_custom_store_and_export_paths() {
    let temp_dir = tempfile::tempdir().unwrap();

    blotter(temp_dir.path())
        .args(["--store", "data/posts.json", "--export", "site.html"])
        .write_stdin("1\nT\nC\nA\n7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog exported to site.html"));

    assert!(temp_dir.path().join("data/posts.json").exists());
    assert!(temp_dir.path().join("site.html").exists());
    assert!(!temp_dir.path().join("blog.json").exists());
}

#[test]
fn test_config_file_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("blotter.json"),
        r#"{"store_file": "from-config.json"}"#,
    )
    .unwrap();

    blotter(temp_dir.path())
        .write_stdin("1\nT\nC\nA\n8\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("from-config.json").exists());
}

#[test]
fn test_malformed_store_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("blog.json"), "{ broken").unwrap();

    blotter(temp_dir.path())
        .write_stdin("8\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Simple Blog").not());

    // The broken file is left for the user to inspect
    let raw = fs::read_to_string(temp_dir.path().join("blog.json")).unwrap();
    assert_eq!(raw, "{ broken");
}
