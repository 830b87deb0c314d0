use assert_cmd::Command;
use predicates::str::contains;

fn hexcat() -> Command {
    let mut cmd = Command::cargo_bin("hexcat").unwrap();
    cmd.current_dir("tests/data");
    cmd
}

#[test]
fn can_print_simple_ascii_file() {
    hexcat().arg("ascii").assert().success().stdout(format!(
        "{:<74}{:<20}\n",
        "00000000  61 62 63 64 65  66 67 68 21 3F  25 26 2F 28 29  0A",
        "abcdefgh!?%&/()."
    ));
}

#[test]
fn reads_from_stdin_when_no_file_is_given() {
    hexcat()
        .write_stdin("ABC")
        .assert()
        .success()
        .stdout(format!("{:<74}{:<20}\n", "00000000  41 42 43", "ABC"));
}

#[test]
fn empty_stdin_produces_no_output() {
    hexcat().write_stdin("").assert().success().stdout("");
}

#[test]
fn custom_column_layout() {
    hexcat()
        .arg("-s")
        .arg("8")
        .arg("-c")
        .arg("2")
        .arg("ascii")
        .assert()
        .success()
        .stdout(format!(
            "{:<60}{:<16}\n",
            "00000000  61 62 63 64 65 66 67 68  21 3F 25 26 2F 28 29 0A",
            "abcdefgh!?%&/()."
        ));
}

#[test]
fn fails_on_non_existing_input() {
    hexcat()
        .arg("non-existing")
        .assert()
        .failure()
        .stderr(contains("could not open file 'non-existing'"));
}

#[test]
fn rejects_zero_bytes_per_column() {
    hexcat()
        .arg("-s")
        .arg("0")
        .arg("ascii")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("bytes per column must be greater than zero"));
}

#[test]
fn rejects_zero_column_count() {
    hexcat()
        .arg("-c")
        .arg("0")
        .arg("ascii")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("column count must be greater than zero"));
}
