use std::process::Command;

fn not() -> Command {
    Command::new(env!("CARGO_BIN_EXE_not"))
}

#[test]
fn no_arguments_exits_zero_and_names_the_program() {
    let output = not().output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("not"));
}

#[test]
fn succeeding_command_is_inverted_to_failure() {
    let status = not().arg("true").status().unwrap();
    assert_eq!(Some(1), status.code());
}

#[test]
fn failing_command_is_inverted_to_success() {
    let status = not().arg("false").status().unwrap();
    assert!(status.success());
}

#[test]
fn missing_executable_is_a_plain_failure() {
    // spawn faults are not part of the inversion mapping
    let status = not().arg("/no/such/bin").status().unwrap();
    assert!(!status.success());
}

#[test]
fn unbalanced_quote_is_a_plain_failure() {
    let status = not().args(["echo", "'oops"]).status().unwrap();
    assert!(!status.success());
}

#[test]
fn quoted_argument_survives_the_round_trip() {
    let status = not().args(["sh", "-c", "'exit 3'"]).status().unwrap();
    assert!(status.success());

    let status = not().args(["sh", "-c", "'exit 0'"]).status().unwrap();
    assert_eq!(Some(1), status.code());
}
