use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value as JsonValue, json};

fn capture() -> JsonValue {
    json!({
        "gameInfo": { "gameVersion": "FireRed", "generation": "3" },
        "trainerInfo": { "ot": "RED", "tid": 46781, "sid": 1204, "gender": 0, "money": 3000 },
        "secondsPlayed": 3725,
        "eventFlags": { "2049": true },
        "inventory": [],
        "pokedex": [],
        "party": [],
        "boxes": [],
        "partySlots": {},
        "boxSlots": {},
        "boxNames": ["BOX 1"],
        "coins": 0,
        "hallOfFame": [],
        "secretBase": {}
    })
}

fn write_capture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("capture.json");
    fs::write(&path, serde_json::to_vec(&capture()).expect("capture serializes"))
        .expect("capture should be writable");
    path
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pksnap"))
        .args(args)
        .output()
        .expect("failed to run pksnap CLI")
}

#[test]
fn cli_prints_text_report_by_default() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = write_capture(dir.path());

    let output = run_cli(&[path.to_string_lossy().as_ref()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trainer: RED (Male)"), "{stdout}");
    assert!(stdout.contains("Badges: 1/8 (Boulder)"), "{stdout}");
}

#[test]
fn cli_emits_the_canonical_document_with_json_flag() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = write_capture(dir.path());

    let output = run_cli(&["--json", path.to_string_lossy().as_ref()]);
    assert!(output.status.success());

    let doc: JsonValue =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document");
    assert_eq!(doc["saveLoaded"], json!(true));
    assert_eq!(doc["playerInfo"]["playerName"], json!("RED"));
    assert_eq!(doc["playerInfo"]["timePlayed"]["hours"], json!(1));
    assert_eq!(doc["pc"]["boxNames"], json!(["BOX 1"]));
}

#[test]
fn cli_emits_master_dump_with_dump_flag() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = write_capture(dir.path());

    let output = run_cli(&["--dump", path.to_string_lossy().as_ref()]);
    assert!(output.status.success());

    let doc: JsonValue =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document");
    assert_eq!(doc["trainerInfo"]["success"], json!(true));
    assert_eq!(doc["rivalName"]["success"], json!(false));
}

#[test]
fn cli_writes_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = write_capture(dir.path());
    let out_path = dir.path().join("saveData.json");

    let output = run_cli(&[
        "--json",
        "--output",
        out_path.to_string_lossy().as_ref(),
        path.to_string_lossy().as_ref(),
    ]);
    assert!(output.status.success());

    let doc: JsonValue = serde_json::from_slice(&fs::read(&out_path).expect("output should exist"))
        .expect("output should be a JSON document");
    assert_eq!(doc["playerInfo"]["secretId"], json!(1204));
}

#[test]
fn cli_fails_cleanly_on_an_undecodable_capture() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("garbage.json");
    fs::write(&path, b"\x00\x01 not json").expect("garbage should be writable");

    let output = run_cli(&[path.to_string_lossy().as_ref()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "{stderr}");
}

#[test]
fn cli_fails_cleanly_on_a_missing_file() {
    let output = run_cli(&["/nonexistent/capture.json"]);
    assert!(!output.status.success());
}
