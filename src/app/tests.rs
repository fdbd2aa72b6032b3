use std::path::PathBuf;

use assert_matches::assert_matches;
use rstest::rstest;

use super::*;
use crate::error::Error;

const NAMES: &str = "\
com.example.Service
com.example.ServiceImpl
com.example.ServiceTest
com.example.Service$1
org.example.Repository
";

fn app(include: &[&str], exclude: &[&str], invert: bool, count: bool) -> App {
    App::new(Options {
        filter: FilterOptions {
            include: include.iter().map(|&x| x.into()).collect(),
            exclude: exclude.iter().map(|&x| x.into()).collect(),
            invert,
        },
        count,
    })
}

fn process(app: &App, input: &str) -> (usize, String) {
    let mut output = Vec::new();
    let accepted = app.process(&mut input.as_bytes(), &mut output).unwrap();
    (accepted, String::from_utf8(output).unwrap())
}

#[test]
fn test_accept_all() {
    let (accepted, output) = process(&app(&[], &[], false, false), NAMES);
    assert_eq!(accepted, 5);
    assert_eq!(output, NAMES);
}

#[rstest]
#[case(
    &["com.example."],
    &[],
    false,
    concat!(
        "com.example.Service\n",
        "com.example.ServiceImpl\n",
        "com.example.ServiceTest\n",
        "com.example.Service$1\n",
    )
)]
#[case(&["Service "], &[], false, "com.example.Service\n")]
#[case(&["Impl |Test "], &[], false, "com.example.ServiceImpl\ncom.example.ServiceTest\n")]
#[case(&[], &["Test ", "$*"], false, "com.example.Service\ncom.example.ServiceImpl\norg.example.Repository\n")]
#[case(&["example.*S"], &["Impl "], false, "com.example.Service\ncom.example.ServiceTest\ncom.example.Service$1\n")]
#[case(&["com."], &[], true, "org.example.Repository\n")]
fn test_filter(
    #[case] include: &[&str],
    #[case] exclude: &[&str],
    #[case] invert: bool,
    #[case] expected: &str,
) {
    let (accepted, output) = process(&app(include, exclude, invert, false), NAMES);
    assert_eq!(output, expected);
    assert_eq!(accepted, expected.lines().count());
}

#[test]
fn test_count() {
    let app = app(&["Service"], &[], false, true);
    let (accepted, output) = process(&app, NAMES);
    assert_eq!(accepted, 4);
    assert_eq!(output, "");
}

#[test]
fn test_line_terminators() {
    let app = app(&["Service "], &[], false, false);
    let (accepted, output) = process(&app, "a.Service\r\nb.Service\nc.Service");
    assert_eq!(accepted, 3);
    assert_eq!(output, "a.Service\nb.Service\nc.Service\n");
}

#[test]
fn test_empty_lines() {
    let all = app(&[], &[], false, false);
    let (accepted, output) = process(&all, "\n\na\n");
    assert_eq!(accepted, 3);
    assert_eq!(output, "\n\na\n");

    let some = app(&["a"], &[], false, false);
    let (accepted, output) = process(&some, "\n\na\n");
    assert_eq!(accepted, 1);
    assert_eq!(output, "a\n");
}

#[test]
fn test_invalid_utf8() {
    let app = app(&["Service "], &[], false, false);
    let mut output = Vec::new();
    let accepted = app
        .process(&mut &b"a\xff.Service\nb.\xffService.x\n"[..], &mut output)
        .unwrap();
    assert_eq!(accepted, 1);
    assert_eq!(output, b"a\xff.Service\n");
}

#[test]
fn test_run() {
    let app = app(&["[filter"], &[], false, false);
    let inputs = [
        InputReference::File(PathBuf::from("etc/defaults/config-java.toml")),
        InputReference::File(PathBuf::from("etc/defaults/config.toml")),
    ];
    let mut output = Vec::new();
    app.run(&inputs, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "[filter]\n[filter]\n");
}

#[test]
fn test_run_count() {
    let app = app(&["[filter] "], &[], false, true);
    let inputs = [
        InputReference::File(PathBuf::from("etc/defaults/config-java.toml")),
        InputReference::File(PathBuf::from("etc/defaults/config.toml")),
    ];
    let mut output = Vec::new();
    app.run(&inputs, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "2\n");
}

#[test]
fn test_run_missing_file() {
    let app = app(&[], &[], false, false);
    let mut output = Vec::new();
    let result = app.run(&[InputReference::File(PathBuf::from("missing.txt"))], &mut output);
    assert_matches!(result, Err(Error::FileNotFoundError { .. }));
    assert!(output.is_empty());
}
