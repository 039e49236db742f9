use assert_cmd::Command;
use predicates::prelude::*;
use rstest::*;
use tempfile::TempDir;

fn learnify(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("learnify").unwrap();
    cmd.env("LEARNIFY_STORAGE_DIR", dir.path())
        .env("LEARNIFY_YOUTUBE_API_KEY", "")
        .arg("--no-color");
    cmd
}

#[rstest]
fn given_debug_flags_when_run_then_success() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["-d", "-d"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Debug mode: debug"));
}

#[rstest]
fn given_generate_config_when_run_then_prints_toml() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_dir"))
        .stdout(predicate::str::contains("[youtube]"));
}

#[rstest]
fn given_added_tasks_when_listed_and_counted_then_persisted_across_runs() {
    let dir = TempDir::new().unwrap();

    learnify(&dir)
        .args(["tasks", "add", "Learn pattern matching"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Task added successfully!"));
    learnify(&dir)
        .args(["tasks", "add", "Write a CLI"])
        .assert()
        .success();

    learnify(&dir)
        .args(["tasks", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn pattern matching"))
        .stdout(predicate::str::contains("\"completed\": false"));

    learnify(&dir)
        .args(["tasks", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 2, completed: 0, remaining: 2"));

    assert!(dir.path().join("learnify_tasks").exists());
}

#[rstest]
fn given_blank_task_when_added_then_usage_error() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["tasks", "add", "   "])
        .assert()
        .code(64);
    assert!(!dir.path().join("learnify_tasks").exists());
}

#[rstest]
fn given_unknown_task_when_toggled_then_error_and_nothing_written() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["tasks", "toggle", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task 42 not found"));
    assert!(!dir.path().join("learnify_tasks").exists());
}

#[rstest]
fn given_manual_bookmark_when_added_twice_then_listed_once() {
    let dir = TempDir::new().unwrap();
    let args = [
        "bookmarks",
        "add",
        "https://doc.rust-lang.org/book/",
        "--type",
        "documentation",
        "--title",
        "The Rust Book",
    ];

    learnify(&dir)
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::contains("Added to bookmarks!"));
    learnify(&dir)
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::contains("Already bookmarked!"));

    learnify(&dir)
        .args(["bookmarks", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 1, videos: 0, documentation: 1"));
}

#[rstest]
fn given_goal_when_set_then_shown_on_next_run() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["goal", "Finish the borrow checker chapter"])
        .assert()
        .success();
    learnify(&dir)
        .arg("goal")
        .assert()
        .success()
        .stdout(predicate::str::contains("Finish the borrow checker chapter"));
}

#[rstest]
fn given_no_api_key_when_search_then_placeholders_and_docs_in_json() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["search", "rust", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"query\": \"rust\""))
        .stdout(predicate::str::contains("rust - Complete Tutorial 2024"))
        .stdout(predicate::str::contains("rust - MDN Web Docs"));
}

#[rstest]
fn given_search_positions_when_bookmark_flag_then_selected_results_saved() {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["search", "rust", "--json", "--bookmark", "1,4"])
        .assert()
        .success();

    learnify(&dir)
        .args(["bookmarks", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 2, videos: 1, documentation: 1"));
}

#[rstest]
#[case("bash")]
#[case("zsh")]
#[case("fish")]
fn given_supported_shell_when_completion_then_script_on_stdout(#[case] shell: &str) {
    let dir = TempDir::new().unwrap();
    learnify(&dir)
        .args(["completion", shell])
        .assert()
        .success()
        .stdout(predicate::str::contains("learnify"));
}
