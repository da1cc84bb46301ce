use std::fs::{self};

use columna::{
    ExitStatus, Options, PROMPT,
    ast::{Answer, Operator},
    error::{Error, InputError, RuntimeError},
    interpreter::{
        evaluator::{add, divide, multiply, subtract},
        formatter::{NumberStyle, column_width, render, to_decimal_string},
        parser::{remove_spaces, split},
    },
    run, solve,
    util::num::parse_prefix,
};
use walkdir::WalkDir;

#[test]
fn case_files_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let case = parse_case(&content).unwrap_or_else(|| panic!("Malformed case file {path:?}"));

        count += 1;
        let (status, output) = run_line(&case.input, Options::default());
        assert_eq!(status.code(), case.status, "exit status of {path:?}");
        assert_eq!(output, case.output, "output of {path:?}");
    }

    assert!(count > 0, "No case files found in tests/cases");
}

struct Case {
    input:  String,
    status: u8,
    output: String,
}

fn parse_case(content: &str) -> Option<Case> {
    let (header, output) = content.split_once("=== output\n")?;
    let mut lines = header.lines();
    let input = lines.next()?.strip_prefix("input: ")?.to_string();
    let status = lines.next()?.strip_prefix("status: ")?.trim().parse().ok()?;

    Some(Case { input,
                status,
                output: output.to_string() })
}

fn run_line(line: &str, options: Options) -> (ExitStatus, String) {
    let input = format!("{line}\n").into_bytes();
    let mut output = Vec::new();
    let status = run(&mut input.as_slice(), &mut output, options).expect("writing to a Vec");

    let output = String::from_utf8(output).expect("output is UTF-8");
    let output = output.strip_prefix(PROMPT)
                       .unwrap_or_else(|| panic!("Missing prompt in {output:?}"))
                       .to_string();
    (status, output)
}

fn assert_answer(src: &str, expected: &str) {
    match solve(src, NumberStyle::Truncated) {
        Ok(worksheet) => assert_eq!(worksheet.answer, Answer::Value(expected.to_string()), "{src}"),
        Err(e) => panic!("Operation {src:?} failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_answer("1+2", "3");
    assert_answer("7*9", "63");
    assert_answer("8-5", "3");
    assert_answer("10/2", "5");
    assert_answer("2-9", "-7");
}

#[test]
fn results_truncate_toward_zero() {
    assert_answer("7/2", "3");
    assert_answer("1/3", "0");
    assert_answer("2.9*1", "2");
    assert_answer("1-1.5", "0");
    assert_answer("1-3.5", "-2");
}

#[test]
fn truncation_matches_direct_computation() {
    let operands = [0.0, 1.0, 2.0, 3.0, 7.0, 10.0, 12.5, 99.0, 1234.0];

    for a in operands {
        for b in operands.iter().copied().filter(|b| *b != 0.0) {
            for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
                let expected = op.function()(a, b).trunc();
                let worksheet = solve(&format!("{a}{op}{b}"), NumberStyle::Truncated).unwrap();
                let Answer::Value(text) = worksheet.answer else {
                    panic!("{a}{op}{b} was undefined");
                };
                assert_eq!(text.parse::<f64>().unwrap(), expected, "{a}{op}{b}");
            }
        }
    }
}

#[test]
fn division_by_zero_is_undefined() {
    for src in ["10/0", "0/0", "123/0.0", "5/00", "9/0abc"] {
        let worksheet = solve(src, NumberStyle::Truncated).unwrap();
        assert_eq!(worksheet.answer, Answer::Undefined, "{src}");
        assert!(!worksheet.is_defined());
    }

    let (status, output) = run_line("10/0", Options::default());
    assert_eq!(status, ExitStatus::Failure);
    assert!(output.ends_with("UNDEFINED\n"));
}

#[test]
fn divide_returns_zero_for_zero_divisor() {
    assert_eq!(divide(10.0, 0.0), 0.0);
    assert_eq!(divide(-3.0, 0.0), 0.0);
    assert_eq!(divide(9.0, 3.0), 3.0);
    assert_eq!(add(1.5, 2.0), 3.5);
    assert_eq!(subtract(1.0, 2.0), -1.0);
    assert_eq!(multiply(4.0, 2.5), 10.0);
}

#[test]
fn rejected_input() {
    assert!(matches!(solve("abc+2", NumberStyle::Truncated),
                     Err(Error::Input(InputError::InvalidOperand { .. }))));
    assert!(matches!(solve("5", NumberStyle::Truncated),
                     Err(Error::Input(InputError::MissingOperator))));
    assert!(matches!(solve("5&2", NumberStyle::Truncated),
                     Err(Error::Input(InputError::UnsupportedOperator { operator: '&' }))));
    assert!(matches!(solve("+3", NumberStyle::Truncated),
                     Err(Error::Input(InputError::InvalidOperand { .. }))));
    assert!(matches!(solve("1 + ", NumberStyle::Truncated),
                     Err(Error::Input(InputError::InvalidOperand { .. }))));
}

#[test]
fn missing_operator_is_reported_before_operands() {
    assert!(matches!(solve("abc", NumberStyle::Truncated),
                     Err(Error::Input(InputError::MissingOperator))));
    assert!(matches!(solve("   ", NumberStyle::Truncated),
                     Err(Error::Input(InputError::MissingOperator))));
}

#[test]
fn error_messages_are_verbatim() {
    assert_eq!(InputError::MissingOperator.to_string(), "No se encontró operador");
    assert_eq!(InputError::InvalidOperand { operand: None }.to_string(),
               "Solo se permiten números");
    assert_eq!(InputError::UnsupportedOperator { operator: '%' }.to_string(),
               "Operador no válido");
    assert_eq!(InputError::from(std::io::Error::other("boom")).to_string(),
               "Error al leer la entrada");
    assert_eq!(RuntimeError::FormatFailure { value: f64::NAN }.to_string(),
               "Error al convertir el resultado a string");
}

#[test]
fn overflowing_result_fails_to_format() {
    let big = "9".repeat(200);
    let src = format!("{big}*{big}");

    assert!(matches!(solve(&src, NumberStyle::Truncated),
                     Err(Error::Runtime(RuntimeError::FormatFailure { .. }))));

    let (status, output) = run_line(&src, Options::default());
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(output, "Error al convertir el resultado a string\n");
}

#[test]
fn read_failure_is_reported() {
    struct Broken;

    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("broken pipe"))
        }
    }

    let mut input = std::io::BufReader::new(Broken);
    let mut output = Vec::new();
    let status = run(&mut input, &mut output, Options::default()).unwrap();

    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(String::from_utf8(output).unwrap(),
               format!("{PROMPT}Error al leer la entrada\n"));
}

#[test]
fn long_lines_are_read_whole() {
    let padding = " ".repeat(100_000);
    let (status, output) = run_line(&format!("1{padding}-{padding}1"), Options::default());

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "  1\n- 1\n---\n  0\n");
}

#[test]
fn remove_spaces_is_idempotent() {
    for src in ["", " ", "1 2", "\t3\t4 ", "a b\tc", " 1\n2 "] {
        let once = remove_spaces(src);
        assert_eq!(remove_spaces(&once), once);
        assert!(!once.contains([' ', '\t']));
    }
}

#[test]
fn split_recovers_operator_at_its_index() {
    for src in ["1+2", "  30 * 4", "9 -1", "8/ 2", "x+y"] {
        let pieces = split(src);
        let index = src.find(['+', '-', '*', '/']).unwrap();

        assert_eq!(pieces.operator, src[index..].chars().next());
        assert_eq!(pieces.left, &src[..index]);
    }
}

#[test]
fn rendered_lines_share_one_width() {
    for src in ["1+2", "12345+1", "1+12345", "99999*99999", "10/0", "3-10"] {
        let worksheet = solve(src, NumberStyle::Truncated).unwrap();
        let expression = &worksheet.expression;
        let width = column_width(&expression.left,
                                 &expression.right,
                                 &worksheet.answer.to_string());

        assert!(width >= expression.left.len());
        assert!(width >= expression.right.len() + 2);

        let text = render(&worksheet);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.chars().count(), width, "{src}: {line:?}");
        }
    }
}

#[test]
fn decimal_style() {
    let (status, output) = run_line("7/2", Options { style: NumberStyle::Decimal });
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(output, "  7\n/ 2\n---\n3.5\n");

    assert_eq!(to_decimal_string(2.0 / 3.0, NumberStyle::Decimal).unwrap(), "0.6666666667");
    assert_eq!(to_decimal_string(1e20, NumberStyle::Decimal).unwrap(), "1e+20");
    assert_eq!(to_decimal_string(1.5e-7, NumberStyle::Decimal).unwrap(), "1.5e-07");
    assert_eq!(to_decimal_string(1_234_567_890.0, NumberStyle::Decimal).unwrap(), "1234567890");
    assert_eq!(to_decimal_string(12_345_678_901.0, NumberStyle::Decimal).unwrap(),
               "1.23456789e+10");
    assert_eq!(to_decimal_string(0.0001, NumberStyle::Decimal).unwrap(), "0.0001");
    assert_eq!(to_decimal_string(0.0, NumberStyle::Decimal).unwrap(), "0");
}

#[test]
fn truncated_style_has_no_magnitude_limit() {
    assert_eq!(to_decimal_string(1e20, NumberStyle::Truncated).unwrap(),
               "100000000000000000000");
    assert_eq!(to_decimal_string(-0.5, NumberStyle::Truncated).unwrap(), "0");
}

#[test]
fn hexadecimal_operands() {
    assert_answer("0x10+1", "17");
    assert_answer("0x1p3*2", "16");
    assert_answer("0XfF-0x.8", "254");
    assert_answer("0xg+1", "1");

    assert_eq!(parse_prefix("-0x1A"), -26.0);
    assert_eq!(parse_prefix("0x1.8p1"), 3.0);
    assert_eq!(parse_prefix("0x2p"), 2.0);
    assert_eq!(parse_prefix("0x1P-1"), 0.5);

    let worksheet = solve("4/0x0", NumberStyle::Truncated).unwrap();
    assert_eq!(worksheet.answer, Answer::Undefined);
}

#[test]
fn carriage_return_without_newline_is_dropped() {
    let input = "1+2\r";
    let mut output = Vec::new();
    let status = run(&mut input.as_bytes(), &mut output, Options::default()).unwrap();

    assert_eq!(status, ExitStatus::Success);
    assert_eq!(String::from_utf8(output).unwrap(),
               format!("{PROMPT}  1\n+ 2\n---\n  3\n"));
}
