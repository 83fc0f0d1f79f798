//! Tests for the .gitignore advisory.

use crate::support::*;

#[test]
fn test_no_gitignore_is_reported() {
    let t = Test::with_template();

    let output = t.run();
    assert_success(&output);
    assert_stdout_contains(&output, "no .gitignore found");
    assert_stdout_contains(&output, "create one and add: .env and .secrets.txt");
    assert!(!t.exists(".gitignore"));
}

#[test]
fn test_missing_backup_entry_is_reported() {
    let t = Test::with_template();
    t.write(".gitignore", "target/\n.env\n");

    let output = t.run();
    assert_success(&output);
    assert_stdout_contains(&output, "add these entries to .gitignore");
    assert_stdout_contains(&output, "• .secrets.txt");
    assert!(!stdout(&output).contains("• .env\n"));
    assert!(!stdout(&output).contains("no .gitignore found"));
}

#[test]
fn test_covered_gitignore_is_quiet() {
    let t = Test::with_template();
    t.write(".gitignore", ".env\n.secrets.txt\n");

    let output = t.run();
    assert_success(&output);
    assert!(!stdout(&output).contains("add these entries"));
    assert!(!stdout(&output).contains("no .gitignore found"));
}

#[test]
fn test_gitignore_is_never_modified() {
    let t = Test::with_template();
    t.write(".gitignore", "target/\n");

    assert_success(&t.run());
    assert_eq!(t.read(".gitignore"), "target/\n");
}
