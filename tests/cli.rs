use std::{fs, process::Command};

/// Runs the binary and returns its exit code, stdout and stderr.
fn tally(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_tally")).args(args)
                                                          .env_remove("RUST_LOG")
                                                          .output()
                                                          .expect("failed to run tally");

    (output.status.code(),
     String::from_utf8(output.stdout).expect("stdout is UTF-8"),
     String::from_utf8(output.stderr).expect("stderr is UTF-8"))
}

#[test]
fn prints_each_value_on_its_own_line() {
    let (code, stdout, stderr) = tally(&["print(4 + 4 - 2);\nprint(4+124);"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "6\n128\n");
    assert_eq!(stderr, "");
}

#[test]
fn tokens_flag_lists_the_stream_before_the_output() {
    let (code, stdout, _) = tally(&["--tokens", "print(4 + 4 - 2);"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout,
               "PRINT\nLPAREN\nNUMBER(4)\nPLUS\nNUMBER(4)\nMINUS\nNUMBER(2)\nRPAREN\nSEMICOLON\nEND\n6\n");
}

#[test]
fn ast_flag_prints_the_grouped_program() {
    let (code, stdout, _) = tally(&["--ast", "print(4 + 4 - 2);"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "print((4 + 4) - 2);\n6\n");
}

#[test]
fn errors_go_to_stderr_with_exit_status_one() {
    let (code, stdout, stderr) = tally(&["print(4+);"]);

    assert_eq!(code, Some(1));
    assert_eq!(stdout, "");
    assert_eq!(stderr,
               "Error on line 1, column 9: Expected a number or '(', found ')'.\n\
                print(4+);\n        ^\n");
}

#[test]
fn runtime_errors_keep_earlier_output() {
    let (code, stdout, stderr) = tally(&["print(1); print(9223372036854775807 + 1);"]);

    assert_eq!(code, Some(1));
    assert_eq!(stdout, "1\n");
    assert!(stderr.contains("Integer overflow"), "{stderr}");
}

#[test]
fn file_flag_reads_the_program_from_disk() {
    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("cli_file_flag.tally");
    fs::write(&path, "print(10 - (3 - 2));\n").expect("failed to write program");

    let (code, stdout, _) = tally(&["--file", path.to_str().expect("UTF-8 path")]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "9\n");
}

#[test]
fn missing_file_fails() {
    let (code, stdout, stderr) = tally(&["--file", "does/not/exist.tally"]);

    assert_eq!(code, Some(1));
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Failed to read the input file"), "{stderr}");
}
