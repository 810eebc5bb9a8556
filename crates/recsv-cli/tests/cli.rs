//! Integration tests for the recsv binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn recsv() -> Command {
    Command::cargo_bin("recsv").unwrap()
}

#[test]
fn parse_fragment_json_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.json");
    std::fs::write(
        &input,
        r#"[
            {"text": "CAFE ARROW", "confidence": 0.98},
            {"text": "Dt: 03/04/2023", "confidence": 0.91},
            {"text": "Coffee x2 250.00", "confidence": 0.95},
            {"text": "Total ₹250.00 with tax", "confidence": 0.93}
        ]"#,
    )
    .unwrap();

    recsv()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "merchant,date,item,qty,unit_price,line_total,currency",
        ))
        .stdout(predicate::str::contains(
            "CAFE ARROW,2023-04-03,Coffee,2,125.00,250.00,INR",
        ));
}

#[test]
fn parse_plain_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "CORNER MART\nMilk 45.00\n").unwrap();

    recsv()
        .arg("parse")
        .arg(&input)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Merchant: CORNER MART"))
        .stdout(predicate::str::contains("Milk"));
}

#[test]
fn parse_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    let output = dir.path().join("receipt.csv");
    std::fs::write(&input, "CORNER MART\nMilk 45.00\n").unwrap();

    recsv()
        .arg("parse")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("merchant,date,item,qty,unit_price,line_total,currency"));
}

#[test]
fn parse_missing_input_fails() {
    recsv()
        .arg("parse")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_processes_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "ALPHA MART\nBread 30.00\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "BRAVO MART\nEggs 60.00\n").unwrap();
    let out_dir = dir.path().join("out");

    recsv()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("a.csv").exists());
    assert!(out_dir.join("b.csv").exists());
}

#[test]
fn config_init_and_show() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("recsv.json");

    recsv()
        .arg("config")
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("head_lines"));
    assert!(content.contains("total_tokens"));

    // `show` picks up recsv.json from the working directory.
    recsv()
        .current_dir(dir.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("head_lines"));
}
