use std::ffi::OsStr;
use std::process::{Command, Output};

use indoc::indoc;

fn tlu_mask<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tlu-mask"))
        .args(args)
        .env_remove("TLU_MASK__FORMAT")
        .env_remove("TLU_MASK__STRICT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run tlu-mask")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_masks() {
    let output = tlu_mask(&["XX1110"]);

    assert!(output.status.success());
    similar_asserts::assert_eq!(
        stdout(&output),
        indoc! {"
            Trigger Config: XX1110

            Trigger Masks:
            Low : F0000000
            High: 00000000
        "}
    );
}

#[test]
fn all_lines_required() {
    let output = tlu_mask(&["111111"]);

    similar_asserts::assert_eq!(
        stdout(&output),
        indoc! {"
            Trigger Config: 111111

            Trigger Masks:
            Low : 00000000
            High: 80000000
        "}
    );
}

#[test]
fn all_lines_dont_care() {
    let output = tlu_mask(&["XXXXXX"]);

    assert!(stdout(&output).ends_with("Low : FFFFFFFF\nHigh: FFFFFFFF\n"));
}

#[test]
fn missing_argument_exits_cleanly() {
    let output = tlu_mask::<&str>(&[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: No trigger configuration provided\n"
    );
}

#[test]
fn rejected_configuration_exits_cleanly() {
    let output = tlu_mask(&["1111111"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration is incorrect length\n"
    );

    let output = tlu_mask(&["11111Y"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration contains invalid character\n"
    );
}

#[test]
fn strict_fails_on_rejected_configuration() {
    let output = tlu_mask(&["--strict", "xx1110"]);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration contains invalid character\n"
    );

    let output = tlu_mask(&["--strict", "XX1110"]);

    assert!(output.status.success());
}

#[test]
fn strict_from_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_tlu-mask"))
        .env("TLU_MASK__STRICT", "true")
        .output()
        .expect("Failed to run tlu-mask");

    assert!(!output.status.success());
}

#[test]
fn json_format() {
    let output = tlu_mask(&["--format", "json", "000000"]);

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["low"], "00000001");
    assert_eq!(report["high"], "00000000");
    assert_eq!(report["candidates"], serde_json::json!([0]));
}

#[test]
fn leading_hyphen_pattern_is_a_character_error() {
    let output = tlu_mask(&["-11111"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration contains invalid character\n"
    );
}

#[test]
fn leading_hyphen_pattern_after_flags() {
    let output = tlu_mask(&["--strict", "-11111"]);

    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration contains invalid character\n"
    );
}

#[test]
fn arguments_after_the_pattern_are_ignored() {
    let output = tlu_mask(&["000000", "extra", "--strict"]);

    assert!(output.status.success());
    similar_asserts::assert_eq!(
        stdout(&output),
        indoc! {"
            Trigger Config: 000000

            Trigger Masks:
            Low : 00000001
            High: 00000000
        "}
    );
}

#[test]
fn flags_before_the_pattern_still_apply_with_extra_arguments() {
    let output = tlu_mask(&["--format", "json", "XX1110", "extra"]);

    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["low"], "F0000000");
    assert_eq!(report["candidates"], serde_json::json!([28, 29, 30, 31]));
}

#[cfg(unix)]
#[test]
fn non_utf8_pattern_is_reported() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let pattern = OsString::from_vec(b"11111\xFF".to_vec());

    let output = tlu_mask(&[pattern]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Input Error: Trigger configuration contains invalid character\n"
    );
}
