use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn receipt_tally() -> Command {
    let mut cmd = Command::cargo_bin("receipt-tally").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("RECEIPT_TALLY_FORMAT")
        .env_remove("RECEIPT_TALLY_LOG_LEVEL");
    cmd
}

fn write_receipts(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"%PDF-1.4").unwrap();
    }
}

#[test]
fn writes_invoice_for_directory() {
    let input = TempDir::new().unwrap();
    write_receipts(
        input.path(),
        &[
            "010125-a-10.00-x-food-store1.pdf",
            "010225-b-5.50-y-food-store2.pdf",
            "readme.txt",
        ],
    );
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("january.txt");

    receipt_tally()
        .arg(input.path())
        .arg(&output)
        .arg("january")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote output to"));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "JANUARY\nTOTAL: $15.50\n\nFOOD $15.50:\n\
         \t[010125] [a] [x] => $10.00\n\
         \t[010225] [b] [y] => $5.50\n\n\n"
    );
}

#[test]
fn json_format_option() {
    let input = TempDir::new().unwrap();
    write_receipts(input.path(), &["010125-a-2.25-x-gas-shell.pdf"]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("january.json");

    receipt_tally()
        .arg(input.path())
        .arg(&output)
        .arg("january")
        .args(["--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["invoice"], "JANUARY");
    assert_eq!(value["total"], 225);
    assert_eq!(value["categories"][0]["name"], "gas");
}

#[test]
fn missing_arguments_fail() {
    receipt_tally()
        .arg("receipts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_directory_fails() {
    let out_dir = TempDir::new().unwrap();
    let missing = out_dir.path().join("nope");
    let output = out_dir.path().join("out.txt");

    receipt_tally()
        .arg(&missing)
        .arg(&output)
        .arg("january")
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory does not exist"));

    assert!(!output.exists());
}

#[test]
fn errors_are_reported_with_logging_off() {
    let out_dir = TempDir::new().unwrap();
    let missing = out_dir.path().join("nope");

    receipt_tally()
        .arg(&missing)
        .arg(out_dir.path().join("out.txt"))
        .arg("january")
        .args(["--log-level", "off"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("directory does not exist"));
}

#[test]
fn malformed_filename_fails_without_output() {
    let input = TempDir::new().unwrap();
    write_receipts(
        input.path(),
        &["010125-a-10.00-x-food-store1.pdf", "a-b-c.pdf"],
    );
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    receipt_tally()
        .arg(input.path())
        .arg(&output)
        .arg("january")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATE-PAYEE-AMOUNT-DESC-CATEGORY-STORE"));

    assert!(!output.exists());
}

#[test]
fn unparseable_amount_fails() {
    let input = TempDir::new().unwrap();
    write_receipts(input.path(), &["a-b-notanumber-d-e-f.pdf"]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    receipt_tally()
        .arg(input.path())
        .arg(&output)
        .arg("january")
        .assert()
        .failure()
        .stderr(predicate::str::contains("notanumber"));

    assert!(!output.exists());
}

#[test]
fn repeated_runs_are_identical() {
    let input = TempDir::new().unwrap();
    write_receipts(
        input.path(),
        &[
            "030125-shell-40-fuel-gas-station.pdf",
            "030225-kroger-12.34-milk-groceries-kroger.pdf",
            "030325-exxon-0.66-snack-gas-station.pdf",
        ],
    );
    let out_dir = TempDir::new().unwrap();
    let first = out_dir.path().join("first.txt");
    let second = out_dir.path().join("second.txt");

    for output in [&first, &second] {
        receipt_tally()
            .arg(input.path())
            .arg(output)
            .arg("march")
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
