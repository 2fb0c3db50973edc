use assert_cmd::Command;
use predicates::prelude::*;

const BARCODE: &str = "34191090020122040320621057601102160058780610";
const LINE: &str = "34190.62108 57601.102163 00587.806100 1 09002012204032";

fn cmd() -> Command {
    Command::cargo_bin("boleto-digitavel").expect("binary builds")
}

#[test]
fn converts_a_positional_barcode() {
    cmd()
        .arg(BARCODE)
        .assert()
        .success()
        .stdout(predicate::str::contains(LINE));
}

#[test]
fn raw_flag_prints_47_digits() {
    cmd()
        .args(["--raw", BARCODE])
        .assert()
        .success()
        .stdout("34190621085760110216300587806100109002012204032\n");
}

#[test]
fn json_flag_emits_an_object_per_input() {
    let assert = cmd().args(["--json", BARCODE]).assert().success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let record: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(record["barcode"], BARCODE);
    assert_eq!(record["digitable"], LINE);
    assert_eq!(record["digits"].as_str().unwrap().len(), 47);
}

#[test]
fn reads_stdin_lines_when_no_arguments() {
    cmd()
        .write_stdin(format!("{BARCODE}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains(LINE));
}

#[test]
fn invalid_input_fails_with_a_message() {
    cmd()
        .arg("12345")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid 44-digit"));
}

#[test]
fn valid_lines_still_print_when_one_input_is_bad() {
    cmd()
        .args([BARCODE, "garbage"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(LINE));
}
