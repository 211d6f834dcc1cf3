//! Tests for the four-line report produced for handled errors

#![allow(clippy::expect_used)]

use log_error::{
    format_error, format_outcome, Error, ErrorFormatter, ErrorKind, ErrorReport, RaiseExt,
    ReportError, Result,
};
use std::path::PathBuf;

fn running_program() -> PathBuf {
    let arg0 = std::env::args_os()
        .next()
        .expect("test binary should have argument zero");
    std::fs::canonicalize(arg0).expect("test binary path should resolve")
}

fn report_lines(report: &str) -> Vec<&str> {
    report.split('\n').collect()
}

const INNER_RAISE_LINE: u32 = line!() + 2;
fn inner() -> Result<i64> {
    Err(Error::division_by_zero())
}

fn middle() -> Result<i64> {
    let value = inner()?;
    Ok(value + 1)
}

fn outer() -> Result<i64> {
    middle().map(|v| v * 2)
}

#[test]
fn test_division_by_zero_scenario() {
    let (err, raise_line) = (Error::division_by_zero(), line!());

    let report = ErrorFormatter::new()
        .entry_point("/app/main")
        .format(&err)
        .expect("located error should format");

    assert_eq!(
        report,
        format!(
            "\n    FILE PATH: /app/main\n    LINE NUMBER: {raise_line}\n    ERROR TYPE: DivisionByZero\n    ERROR MESSAGE: division by zero"
        )
    );
}

#[test]
fn test_four_labeled_lines_in_order() {
    let err = Error::with_message(ErrorKind::Validation, "name must not be empty");
    let report = format_error(&err).expect("located error should format");
    let lines = report_lines(&report);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("    FILE PATH: "));
    assert!(lines[2].starts_with("    LINE NUMBER: "));
    assert!(lines[3].starts_with("    ERROR TYPE: "));
    assert!(lines[4].starts_with("    ERROR MESSAGE: "));
    assert_eq!(lines[3], "    ERROR TYPE: Validation");
    assert_eq!(lines[4], "    ERROR MESSAGE: name must not be empty");
}

#[test]
fn test_file_path_is_running_program_regardless_of_depth() {
    let shallow = Error::internal();
    let deep = outer().expect_err("inner always fails");

    let shallow_report = ErrorReport::capture(&shallow).expect("located error should format");
    let deep_report = ErrorReport::capture(&deep).expect("located error should format");

    assert_eq!(shallow_report.file_path(), running_program());
    assert_eq!(deep_report.file_path(), running_program());
    assert!(deep_report.file_path().is_absolute());
}

#[test]
fn test_line_number_is_raise_site_not_format_site() {
    let err = outer().expect_err("inner always fails");

    let format_line = line!() + 1;
    let report = ErrorReport::capture(&err).expect("located error should format");

    assert_eq!(report.line_number(), INNER_RAISE_LINE);
    assert_ne!(report.line_number(), format_line);
}

#[test]
fn test_question_mark_records_conversion_site() {
    const READ_LINE: u32 = line!() + 2;
    fn read_missing() -> Result<String> {
        Ok(std::fs::read_to_string("/nonexistent-log-error-dir/config.toml")?)
    }

    let err = read_missing().expect_err("file does not exist");
    let report = ErrorReport::capture(&err).expect("located error should format");

    assert_eq!(report.line_number(), READ_LINE);
    assert_eq!(report.error_type(), "Io");
    assert!(!report.error_message().is_empty());
}

#[test]
fn test_foreign_error_reports_type_name() {
    let (result, raise_line) = ("12x".parse::<u32>().raised(), line!());
    let err = result.expect_err("not a number");

    let report = ErrorFormatter::new()
        .entry_point("/app/main")
        .report(&err)
        .expect("raised error should format");

    assert_eq!(report.line_number(), raise_line);
    assert_eq!(report.error_type(), std::any::type_name::<std::num::ParseIntError>());
    assert_eq!(report.error_message(), err.error().to_string());
}

#[test]
fn test_context_keeps_raise_line() {
    let (err, raise_line) = (Error::not_found(), line!());
    let err = err.context("loading todos");

    let report = ErrorReport::capture(&err).expect("located error should format");

    assert_eq!(report.line_number(), raise_line);
    assert_eq!(report.error_type(), "NotFound");
    assert_eq!(report.error_message(), "loading todos: not found");
}

#[test]
fn test_no_active_error_fails() {
    let outcome: Result<u32> = Ok(7);
    assert_eq!(format_outcome(&outcome), Err(ReportError::NoActiveError));

    let formatter = ErrorFormatter::new().entry_point("/app/main");
    assert_eq!(formatter.format_outcome(&outcome), Err(ReportError::NoActiveError));
}

#[test]
fn test_failed_outcome_formats_its_error() {
    let (outcome, raise_line): (Result<u32>, u32) = (Err(Error::parse()), line!());

    let report = ErrorFormatter::new()
        .entry_point("/app/main")
        .format_outcome(&outcome)
        .expect("failed outcome should format");

    assert!(report.contains(&format!("LINE NUMBER: {raise_line}\n")));
    assert!(report.contains("ERROR TYPE: Parse\n"));
    assert!(report.ends_with("ERROR MESSAGE: parse error"));
}

#[test]
fn test_message_newlines_are_kept_verbatim() {
    let err = Error::other("first\nsecond");
    let report = ErrorFormatter::new()
        .entry_point("/app/main")
        .format(&err)
        .expect("located error should format");

    assert!(report.ends_with("    ERROR TYPE: Other\n    ERROR MESSAGE: first\nsecond"));
}
