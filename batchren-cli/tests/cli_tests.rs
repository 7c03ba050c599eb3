use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn batchren() -> Command {
    let mut cmd = Command::cargo_bin("batchren").unwrap();
    cmd.env_remove("BATCHREN_DIR")
        .env_remove("BATCHREN_YES")
        .env_remove("RUST_LOG");
    cmd
}

fn temp_with_files(names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in names {
        temp.child(name).write_str(name).unwrap();
    }
    temp
}

#[test]
fn test_help_command() {
    batchren()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Batch-rename the files of a folder by prefix or literal find/replace",
        ));
}

#[test]
fn test_version_subcommand() {
    batchren()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("batchren 0.1.0"));
}

#[test]
fn test_version_subcommand_json() {
    batchren()
        .args(["version", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r#"\{"name":"batchren","version":"0\.1\.0"\}"#).unwrap());
}

#[test]
fn test_prepend_renames_every_file() {
    let temp = temp_with_files(&["img1.png", "img2.png"]);

    batchren()
        .args(["prepend", "2024_"])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ img1.png → 2024_img1.png"))
        .stdout(predicate::str::contains("✓ img2.png → 2024_img2.png"))
        .stdout(predicate::str::contains("Successfully renamed: 2 files"))
        .stdout(predicate::str::contains("Errors").not());

    temp.child("2024_img1.png").assert(predicate::path::exists());
    temp.child("2024_img2.png").assert(predicate::path::exists());
    temp.child("img1.png").assert(predicate::path::missing());
}

#[test]
fn test_prepend_collision_is_reported_and_skipped() {
    let temp = temp_with_files(&["a.txt", "new_a.txt"]);

    batchren()
        .args(["prepend", "new_"])
        .arg(temp.path())
        .arg("-y")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✓ new_a.txt → new_new_a.txt"))
        .stdout(predicate::str::contains("Successfully renamed: 1 files"))
        .stdout(predicate::str::contains(
            "⚠ File 'new_a.txt' already exists - skipping 'a.txt'",
        ));

    temp.child("a.txt").assert("a.txt");
    temp.child("new_new_a.txt").assert("new_a.txt");
}

#[test]
fn test_replace_substitutes_all_occurrences() {
    let temp = temp_with_files(&["my holiday photo.jpg", "notes.txt"]);

    batchren()
        .args(["replace", " ", "_"])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "✓ my holiday photo.jpg → my_holiday_photo.jpg",
        ))
        .stdout(predicate::str::contains("notes.txt").not());

    temp.child("my_holiday_photo.jpg")
        .assert(predicate::path::exists());
    temp.child("notes.txt").assert(predicate::path::exists());
}

#[test]
fn test_replace_with_empty_replacement() {
    let temp = temp_with_files(&["report (copy).pdf"]);

    batchren()
        .args(["replace", " (copy)", ""])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success();

    temp.child("report.pdf").assert(predicate::path::exists());
}

#[test]
fn test_replace_without_match_is_a_notice() {
    let temp = temp_with_files(&["report.pdf"]);

    batchren()
        .args(["replace", "xyz", "abc"])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("contain 'xyz'"));

    temp.child("report.pdf").assert(predicate::path::exists());
}

#[test]
fn test_empty_folder_is_a_notice() {
    let temp = TempDir::new().unwrap();
    temp.child("subdir").create_dir_all().unwrap();

    batchren()
        .args(["prepend", "x_"])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found"));
}

#[test]
fn test_missing_folder_argument() {
    batchren()
        .args(["prepend", "x_", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No folder selected"));
}

#[test]
fn test_empty_prefix_is_rejected() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .args(["prepend", "   "])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Prefix text must not be empty"));

    temp.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_empty_find_is_rejected() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .args(["replace", "", "b"])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Find text must not be empty"));
}

#[test]
fn test_unreadable_folder() {
    let temp = TempDir::new().unwrap();

    batchren()
        .args(["prepend", "x_"])
        .arg(temp.path().join("does-not-exist"))
        .arg("--yes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error reading folder"));
}

#[test]
fn test_dry_run_leaves_files_alone() {
    let temp = temp_with_files(&["a.txt", "new_a.txt"]);

    batchren()
        .args(["prepend", "new_"])
        .arg(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("→ new_new_a.txt"))
        .stdout(predicate::str::contains("Exists, skip"))
        .stdout(predicate::str::contains("1 to rename, 1 skipped"));

    temp.child("a.txt").assert(predicate::path::exists());
    temp.child("new_a.txt").assert("new_a.txt");
    temp.child("new_new_a.txt").assert(predicate::path::missing());
}

#[test]
fn test_dry_run_summary_preview() {
    let temp = temp_with_files(&["img1.png"]);

    batchren()
        .args(["prepend", "2024_"])
        .arg(temp.path())
        .args(["--dry-run", "--preview", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] prepend '2024_'"))
        .stdout(predicate::str::contains("  img1.png → 2024_img1.png"))
        .stdout(predicate::str::contains("Would rename: 1 files, skip: 0"));
}

#[test]
fn test_refuses_to_prompt_without_terminal() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .args(["prepend", "x_"])
        .arg(temp.path())
        .write_stdin("y\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-interactive"));

    temp.child("a.txt").assert(predicate::path::exists());
    temp.child("x_a.txt").assert(predicate::path::missing());
}

#[test]
fn test_yes_from_environment() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .env("BATCHREN_YES", "true")
        .args(["prepend", "x_"])
        .arg(temp.path())
        .write_stdin("")
        .assert()
        .success();

    temp.child("x_a.txt").assert(predicate::path::exists());
}

#[test]
fn test_yes_from_environment_accepts_numeric_value() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .env("BATCHREN_YES", "1")
        .args(["prepend", "x_"])
        .arg(temp.path())
        .write_stdin("")
        .assert()
        .success();

    temp.child("x_a.txt").assert(predicate::path::exists());
}

#[test]
fn test_falsey_yes_from_environment_still_confirms() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .env("BATCHREN_YES", "0")
        .args(["prepend", "x_"])
        .arg(temp.path())
        .write_stdin("y\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-interactive"));

    temp.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_no_color_from_environment() {
    let temp = temp_with_files(&["a.png"]);

    for value in ["1", "yes"] {
        batchren()
            .env("NO_COLOR", value)
            .arg("list")
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("• a.png"));

        batchren()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success();
    }

    batchren()
        .env("NO_COLOR", "1")
        .args(["prepend", "new_"])
        .arg(temp.path())
        .args(["--dry-run", "--preview", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  a.png → new_a.png"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_folder_from_environment() {
    let temp = temp_with_files(&["a.txt"]);

    batchren()
        .env("BATCHREN_DIR", temp.path())
        .args(["prepend", "x_", "--yes"])
        .assert()
        .success();

    temp.child("x_a.txt").assert(predicate::path::exists());
}

#[test]
fn test_relative_folder_with_directory_flag() {
    let temp = temp_with_files(&["a.txt"]);
    temp.child("inbox").create_dir_all().unwrap();
    temp.child("inbox/scan.pdf").write_str("scan").unwrap();

    batchren()
        .arg("-C")
        .arg(temp.path())
        .args(["prepend", "done_", "inbox", "--yes"])
        .assert()
        .success();

    temp.child("inbox/done_scan.pdf")
        .assert(predicate::path::exists());
    temp.child("a.txt").assert(predicate::path::exists());
}

#[test]
fn test_json_output() {
    let temp = temp_with_files(&["img1.png", "img2.png"]);

    let output = batchren()
        .args(["prepend", "2024_"])
        .arg(temp.path())
        .args(["--yes", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["operation"], "prepend");
    assert_eq!(json["summary"]["renamed"], 2);
    assert_eq!(json["renamed"][1]["to"], "2024_img2.png");
    assert_eq!(json["messages"].as_array().unwrap().len(), 0);
}

#[test]
fn test_quiet_still_reports_skips() {
    let temp = temp_with_files(&["a.txt", "new_a.txt"]);

    batchren()
        .args(["prepend", "new_"])
        .arg(temp.path())
        .args(["--yes", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("already exists - skipping 'a.txt'"));
}

#[test]
fn test_list_command() {
    let temp = temp_with_files(&["b.png", "a.png"]);
    temp.child("raw").create_dir_all().unwrap();

    batchren()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files in"))
        .stdout(predicate::str::contains("• a.png\n• b.png\n"))
        .stdout(predicate::str::contains("• raw").not());
}

#[test]
fn test_list_json() {
    let temp = temp_with_files(&["a.png"]);

    let output = batchren()
        .arg("list")
        .arg(temp.path())
        .args(["--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0], "a.png");
}
