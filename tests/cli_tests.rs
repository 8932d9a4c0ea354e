use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn prints_version() {
    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.arg("-v");
    cmd.assert().success().stdout(predicate::str::starts_with(format!(
        "go-go-web {}",
        env!("CARGO_PKG_VERSION")
    )));
}

#[test]
fn no_path_prints_help() {
    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: no file or folder name specified",
        ))
        .stdout(predicate::str::contains("--stylesheet"));
}

#[test]
fn converts_into_default_folder() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("hello.txt"), "Hello\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).arg("hello.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("til folder created"))
        .stdout(predicate::str::contains(
            "hello.txt converted to til/hello.html successfully!",
        ));

    let html = fs::read_to_string(tmp.path().join("til/hello.html")).unwrap();
    assert!(html.contains("<p>Hello</p>"));
}

#[test]
fn recreates_existing_output_folder() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("out")).unwrap();
    fs::write(tmp.path().join("out/stale.html"), "old").unwrap();
    fs::write(tmp.path().join("a.md"), "**a**\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).args(["-o", "out", "a.md"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("out folder deleted"));

    assert!(!tmp.path().join("out/stale.html").exists());
    assert!(tmp.path().join("out/a.html").exists());
}

#[test]
fn stylesheet_flag_adds_link() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path())
        .args(["-s", "https://example.com/s.css", "a.txt"]);
    cmd.assert().success();

    let html = fs::read_to_string(tmp.path().join("til/a.html")).unwrap();
    assert!(html.contains("\t<link rel=\"stylesheet\" href=\"https://example.com/s.css\">\n"));
}

#[test]
fn config_file_sets_output_and_stylesheet() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "output = \"public\"\nstylesheet = \"style.css\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join("a.txt"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).args(["-c", "config.toml", "a.txt"]);
    cmd.assert().success();

    let html = fs::read_to_string(tmp.path().join("public/a.html")).unwrap();
    assert!(html.contains("href=\"style.css\""));
    assert!(!tmp.path().join("til").exists());
}

#[test]
fn cli_flag_beats_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("config.toml"), "output = \"public\"\n").unwrap();
    fs::write(tmp.path().join("a.txt"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path())
        .args(["-c", "config.toml", "-o", "build", "a.txt"]);
    cmd.assert().success();

    assert!(tmp.path().join("build/a.html").exists());
    assert!(!tmp.path().join("public").exists());
}

#[test]
fn missing_config_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).args(["-c", "nope.toml", "a.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
    assert!(!tmp.path().join("til").exists());
}

#[test]
fn unsupported_extension_fails() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("a.rst"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).arg("a.rst");
    cmd.assert().failure().stderr(predicate::str::contains(
        "a.rst was not converted. File extension should be .md or .txt",
    ));
    assert_eq!(fs::read_dir(tmp.path().join("til")).unwrap().count(), 0);
}

#[test]
fn missing_input_leaves_output_alone() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("til")).unwrap();
    fs::write(tmp.path().join("til/keep.html"), "keep").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).arg("missing.md");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing.md does not exist"))
        .stdout(predicate::str::contains("--stylesheet"));
    assert!(tmp.path().join("til/keep.html").exists());
}

#[test]
fn refuses_to_clear_current_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("a.txt"), "x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).args(["-o", ".", "a.txt"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("refusing to clear output folder"));
    assert!(tmp.path().join("a.txt").exists());
}

#[test]
fn converts_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("docs")).unwrap();
    fs::write(tmp.path().join("docs/one.md"), "*x* y\n").unwrap();
    fs::write(tmp.path().join("docs/two.txt"), "two\n").unwrap();
    fs::write(tmp.path().join("docs/three.json"), "{}").unwrap();

    let mut cmd = cargo_bin_cmd!("go-go-web");
    cmd.current_dir(tmp.path()).arg("docs");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("one.html successfully!"))
        .stdout(predicate::str::contains("two.html successfully!"))
        .stderr(predicate::str::contains("three.json was not converted"));

    assert!(tmp.path().join("til/one.html").exists());
    assert!(tmp.path().join("til/two.html").exists());
}

#[test]
fn refuses_to_clear_folder_holding_the_input() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("notes")).unwrap();
    fs::write(tmp.path().join("notes/a.md"), "x\n").unwrap();

    for input in ["notes", "notes/a.md"] {
        let mut cmd = cargo_bin_cmd!("go-go-web");
        cmd.current_dir(tmp.path()).args(["-o", "notes", input]);
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("it contains the input"));
        assert!(tmp.path().join("notes/a.md").exists());
    }
}
