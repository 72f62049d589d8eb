//! tests/cli.rs — le binaire `smoke` en boîte noire, sur stdout.
//!
//! Propriétés vérifiées :
//! - code de sortie 0, sans argument ;
//! - exactement 3 lignes (alib, blib, rapport de config) ;
//! - la dernière ligne est `CONFIG_PARAM_1 is '<valeur>'` ;
//! - deux exécutions produisent des octets identiques.

use assert_cmd::Command;
use predicates::str::ends_with;

fn cmd() -> Command {
    Command::cargo_bin("smoke").unwrap()
}

fn captured_stdout() -> Vec<u8> {
    cmd().assert().success().get_output().stdout.clone()
}

#[test]
fn succeeds_and_reports_the_configured_value() {
    cmd()
        .assert()
        .success()
        .stdout(ends_with(format!("{}\n", buildconf::report_line())));
}

#[test]
fn emits_exactly_three_lines_in_order() {
    let out = captured_stdout();
    let text = String::from_utf8(out).expect("stdout utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {text:?}");
    assert_eq!(lines[0], alib::ALIB_LINE);
    assert_eq!(lines[1], blib::BLIB_LINE);
    assert_eq!(lines[2], buildconf::report_line());
}

#[test]
fn output_is_byte_identical_across_runs() {
    assert_eq!(captured_stdout(), captured_stdout());
}
