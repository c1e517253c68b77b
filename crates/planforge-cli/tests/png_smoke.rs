use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

#[test]
fn cli_renders_png_smoke() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("single_storey.json");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("out.png");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    Command::new(exe)
        .current_dir(&root)
        .args([
            "render",
            "--format",
            "png",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
    // Interactive surface at scale 1.0.
    let decoder = png::Decoder::new(&bytes[..]);
    let reader = decoder.read_info().expect("decode png");
    assert_eq!(
        (reader.info().width, reader.info().height),
        (900, 640),
        "unexpected surface size"
    );
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("single_storey.json");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_fixture = tmp.path().join("single_storey.json");
    fs::copy(&fixture, &tmp_fixture).expect("copy fixture");

    let expected_out = tmp_fixture.with_extension("png");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    Command::new(exe)
        .current_dir(&root)
        .args([
            "render",
            "--format",
            "png",
            tmp_fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&expected_out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
}

#[test]
fn cli_prints_svg_to_stdout_by_default() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("single_storey.json");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .args(["render", fixture.to_string_lossy().as_ref()])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.starts_with("<svg "));
    assert!(stdout.contains("Aurora 24"));
    assert!(stdout.contains("Ground Floor"));
}

#[test]
fn cli_renders_upper_floors_with_their_level_label() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("two_storey_positioned.json");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .args(["render", "--floor", "1", fixture.to_string_lossy().as_ref()])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.contains("Level 1"));
    assert!(stdout.contains("MASTER BEDROOM"));
}

#[test]
fn cli_inspect_reports_floors_and_areas() {
    let root = repo_root();
    let fixture = root.join("fixtures").join("two_storey_positioned.json");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    let assert = Command::new(exe)
        .current_dir(&root)
        .args(["inspect", fixture.to_string_lossy().as_ref()])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("inspect json");
    assert_eq!(value["rooms"], 8);
    assert_eq!(value["floors"][0]["label"], "Ground Floor");
    assert_eq!(value["floors"][1]["label"], "Level 1");
    assert_eq!(value["floors"][1]["rooms"], 4);
}

#[test]
fn cli_rejects_malformed_documents() {
    let root = repo_root();
    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").expect("write");

    let exe = assert_cmd::cargo_bin!("planforge-cli");
    Command::new(exe)
        .current_dir(&root)
        .args(["render", bad.to_string_lossy().as_ref()])
        .assert()
        .failure();
}
