//! End-to-end tests for the subst binary
//!
//! Each test writes a rule script to a temporary file, pipes input through the
//! binary and checks stdout, stderr and the exit status.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn rules_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create rules file");
    file.write_all(contents.as_bytes())
        .expect("write rules file");
    file
}

fn run_subst(rules: &NamedTempFile, input: impl Into<Vec<u8>>) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("subst");
    cmd.env_remove("SUBST_LOG")
        .arg(rules.path())
        .write_stdin(input);
    cmd.assert()
}

#[test]
fn line_rule_applies_per_line_and_drops_final_newline() {
    let rules = rules_file(r#"line "foo" with "bar""#);
    run_subst(&rules, "foofoo\nbaz\n")
        .success()
        .stdout("barbar\nbaz")
        .stderr("");
}

#[test]
fn text_rule_applies_to_whole_block() {
    let rules = rules_file(r#"text "a+" with "X""#);
    run_subst(&rules, "aaa bb aaaa")
        .success()
        .stdout("X bb X")
        .stderr("");
}

#[test]
fn line_rules_then_text_rules() {
    let rules = rules_file(
        r#"
        // strip trailing blanks, then squeeze empty lines
        line "\\s+$" with ""
        text "\n\n+" with "\n"
        "#,
    );
    run_subst(&rules, "hello   \n\nworld")
        .success()
        .stdout("hello\nworld");
}

#[test]
fn non_utf8_input_passes_through() {
    let rules = rules_file(r#"line "a" with "A""#);
    run_subst(&rules, &b"caf\xe9 bar\n"[..])
        .success()
        .stdout(predicate::eq(&b"caf\xe9 bAr"[..]))
        .stderr("");
}

#[test]
fn block_mode_preserves_trailing_whitespace() {
    let rules = rules_file(r#"text `o` with `0`"#);
    run_subst(&rules, "foo  \nbar \n").success().stdout("f00  \nbar \n");
}

#[test]
fn capture_groups_in_templates() {
    let rules = rules_file(r#"line `(\w+)=(\w+)` with "$2=$1""#);
    run_subst(&rules, "a=b\nkey=value\n")
        .success()
        .stdout("b=a\nvalue=key");
}

#[test]
fn empty_result_prints_nothing() {
    let rules = rules_file(r#"text "(?s).*" with """#);
    run_subst(&rules, "anything\nat all\n").success().stdout("");
}

#[test]
fn script_without_rules_fails() {
    let rules = rules_file("// no rules here\n");
    run_subst(&rules, "input")
        .failure()
        .code(1)
        .stdout("")
        .stderr("ERROR: Empty substitution specification\n");
}

#[test]
fn two_arguments_is_a_usage_error() {
    let rules = rules_file(r#"line "a" with "b""#);
    let mut cmd = cargo_bin_cmd!("subst");
    cmd.arg(rules.path()).arg(rules.path()).write_stdin("a\n");
    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR: Usage: subst replacement-rules-file"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("subst");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("ERROR: Usage:"));
}

#[test]
fn missing_rules_file() {
    let mut cmd = cargo_bin_cmd!("subst");
    cmd.arg("/no/such/dir/subst.rules").write_stdin("a\n");
    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR: /no/such/dir/subst.rules: "));
}

#[test]
fn syntax_error_names_file_and_line() {
    let rules = rules_file("line \"a\" with \"b\"\n\ntext \"c\" using \"d\"\n");
    let expected = format!(
        "ERROR: {}:3 - Unexpected keyword: \"using\"\n",
        rules.path().display()
    );
    run_subst(&rules, "a\n")
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::diff(expected));
}

#[test]
fn empty_pattern_is_rejected() {
    let rules = rules_file(r#"line "" with "x""#);
    run_subst(&rules, "a\n")
        .failure()
        .code(1)
        .stderr(predicate::str::ends_with(":1 - Empty string as pattern\n"));
}

#[test]
fn bad_regex_is_rejected() {
    let rules = rules_file("text \"ok\" with \"\"\nline \"(unclosed\" with \"x\"\n");
    run_subst(&rules, "a\n")
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(":2 - regex parse error"));
}
