use std::process::{Command, Output};

fn calcfront(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_calcfront")).args(args)
                                                 .env_remove("RUST_LOG")
                                                 .output()
                                                 .expect("failed to run calcfront")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_value_of_valid_expression() {
    let output = calcfront(&["2*(7+1)"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "16\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn rejected_input_exits_with_two() {
    let output = calcfront(&["1232((9))"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Extra tokens after expression"),
            "unexpected stderr: {}",
            stderr(&output));
}

#[test]
fn division_by_zero_exits_with_two() {
    let output = calcfront(&["1/0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Division by zero"));
}

#[test]
fn reads_expression_from_file() {
    let output = calcfront(&["--file", "tests/example.calc"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "500\n");
}

#[test]
fn unreadable_file_exits_with_one() {
    let output = calcfront(&["--file", "tests/no-such-file.calc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Failed to read the input file"));
}

#[test]
fn tree_flag_prints_s_expression() {
    let output = calcfront(&["--tree", "1+2*3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "(+ 1 (* 2 3))\n");
}

#[test]
fn tokens_flag_prints_kinds_before_value() {
    let output = calcfront(&["--tokens", "(1)+2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output),
               "OpenParen IntDigit CloseParen Plus IntDigit\n3\n");
}

#[test]
fn tokens_are_printed_even_when_parsing_fails() {
    let output = calcfront(&["--tokens", "1+"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "IntDigit Plus\n");
}
