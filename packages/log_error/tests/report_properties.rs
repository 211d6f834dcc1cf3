//! Property tests for the report layout

#![allow(clippy::expect_used)]

use log_error::{Error, ErrorFormatter, ErrorKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ErrorKind> {
    prop_oneof![
        Just(ErrorKind::DivisionByZero),
        Just(ErrorKind::Io),
        Just(ErrorKind::Parse),
        Just(ErrorKind::Validation),
        Just(ErrorKind::NotFound),
        Just(ErrorKind::Internal),
        "[a-z ]{1,20}".prop_map(ErrorKind::Other),
    ]
}

const RAISE_LINE: u32 = line!() + 2;
fn raise(kind: ErrorKind, message: &str) -> Error {
    Error::with_message(kind, message)
}

proptest! {
    #[test]
    fn report_has_four_labeled_lines(
        kind in kind_strategy(),
        message in "[^\r\n]{0,60}",
        path in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
    ) {
        let label = kind.label();
        let err = raise(kind, &message);
        let report = ErrorFormatter::new()
            .entry_point(&path)
            .format(&err)
            .expect("located error should format");

        let lines: Vec<&str> = report.split('\n').collect();
        prop_assert_eq!(lines.len(), 5);
        prop_assert_eq!(lines[0], "");
        prop_assert_eq!(lines[1], format!("    FILE PATH: {path}"));
        prop_assert_eq!(lines[2], format!("    LINE NUMBER: {RAISE_LINE}"));
        prop_assert_eq!(lines[3], format!("    ERROR TYPE: {label}"));
        prop_assert_eq!(lines[4], format!("    ERROR MESSAGE: {message}"));
    }
}
