use std::fs;

use tally::get_result;
use walkdir::WalkDir;

/// What the comment after a code block says the block does.
#[derive(Debug, PartialEq)]
enum Expectation {
    Output(Vec<i64>),
    Error(String),
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expectation)) in extract_tally_blocks(&content).into_iter().enumerate() {
            count += 1;
            match (get_result(&code), expectation) {
                (Ok(printed), Expectation::Output(expected)) => {
                    assert_eq!(printed, expected, "example {} in {:?}:\n{}", i + 1, path, code);
                },
                (Err(e), Expectation::Error(stage)) => {
                    assert_eq!(e.stage(), stage, "example {} in {:?}:\n{}", i + 1, path, code);
                },
                (result, expectation) => {
                    panic!("Example {} in {:?} failed:\n{}\nExpected {:?}, got {:?}",
                           i + 1,
                           path,
                           code,
                           expectation,
                           result);
                },
            }
        }
    }

    assert!(count > 0, "No tally examples found in book/src");
}

/// Collects every ```tally block with the `<!-- output: .. -->` or
/// `<!-- error: .. -->` comment that follows it.
fn extract_tally_blocks(content: &str) -> Vec<(String, Expectation)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut pending: Option<String> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```tally") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            pending = Some(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
            continue;
        }
        if let Some(code) = pending.take() {
            let comment = trimmed.strip_prefix("<!--")
                                 .and_then(|rest| rest.strip_suffix("-->"))
                                 .map(str::trim)
                                 .unwrap_or_else(|| panic!("Block without expectation:\n{code}"));
            let expectation = if let Some(values) = comment.strip_prefix("output:") {
                Expectation::Output(values.split_whitespace()
                                          .map(|v| v.parse().expect("output values are integers"))
                                          .collect())
            } else if let Some(stage) = comment.strip_prefix("error:") {
                Expectation::Error(stage.trim().to_string())
            } else {
                panic!("Unknown expectation '{comment}'")
            };
            blocks.push((code, expectation));
        }
    }

    blocks
}

fn assert_output(src: &str, expected: &[i64]) {
    match get_result(src) {
        Ok(printed) => assert_eq!(printed, expected, "Script printed the wrong values: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, stage: &str) {
    match get_result(src) {
        Ok(printed) => panic!("Script succeeded with {printed:?} but was expected to fail"),
        Err(e) => assert_eq!(e.stage(), stage, "Script failed in the wrong stage: {e}"),
    }
}

#[test]
fn end_to_end_examples() {
    assert_output("print(4 + 4 - 2);", &[6]);
    assert_output("print(4+124);", &[128]);
    assert_output("\nprint(4 + 4 - 2);\n", &[6]);
}

#[test]
fn addition_and_subtraction_are_exact() {
    let pairs = [(0, 0), (1, 2), (17, 25), (1_000_000, 999_999), (i64::MAX - 5, 5)];
    for (a, b) in pairs {
        assert_output(&format!("print({a}+{b});"), &[a + b]);
        assert_output(&format!("print({a}-{b});"), &[a - b]);
    }
}

#[test]
fn subtraction_is_left_associative() {
    assert_output("print(10-3-2);", &[5]);
    assert_output("print(1-1-1-1);", &[-2]);
    assert_output("print(5-2+1);", &[4]);
}

#[test]
fn parentheses_override_associativity() {
    assert_output("print(10-(3-2));", &[9]);
    assert_output("print((10-3)-2);", &[5]);
    assert_output("print(5-(2+1));", &[2]);
    assert_output("print(((((1)))));", &[1]);
}

#[test]
fn statements_run_in_order() {
    assert_output("print(1);print(2);\nprint(3);", &[1, 2, 3]);
    assert_output("print(1);print(1);", &[1, 1]);
}

#[test]
fn empty_and_whitespace_programs_fail_to_parse() {
    assert_failure("", "parse");
    assert_failure("   \n\t  \r\n", "parse");
}

#[test]
fn malformed_statements_fail_to_parse() {
    assert_failure("print(4+);", "parse");
    assert_failure("print 4;", "parse");
    assert_failure("print(4)", "parse");
    assert_failure("print();", "parse");
    assert_failure("print((4);", "parse");
    assert_failure("print(4));", "parse");
    assert_failure("print(4 4);", "parse");
    assert_failure("4;", "parse");
    assert_failure("print(1); 2", "parse");
    assert_failure("print", "parse");
}

#[test]
fn unknown_input_fails_to_tokenize() {
    assert_failure("print(2*3);", "lex");
    assert_failure("printx(3);", "lex");
    assert_failure("print(x);", "lex");
    assert_failure("print(9223372036854775808);", "lex");
}

#[test]
fn literal_range() {
    assert_output("print(9223372036854775807);", &[i64::MAX]);
    assert_output("print(0-9223372036854775807-1);", &[i64::MIN]);
}

#[test]
fn overflow_is_a_runtime_error() {
    assert_failure("print(9223372036854775807+1);", "runtime");
    assert_failure("print(0-9223372036854775807-2);", "runtime");
}

#[test]
fn lexical_errors_abort_before_any_output() {
    // The first statement is valid, but the whole source is tokenized first.
    assert_failure("print(1); print(#);", "lex");
}
