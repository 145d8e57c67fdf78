use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("nextjs-cli"))
}

#[test]
fn help_lists_all_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list-package-managers"));
}

#[test]
fn unknown_subcommand_fails() {
    cli().arg("frobnicate").assert().failure();
}

#[test]
fn list_repos_prints_builtin_catalog() {
    let td = tempfile::TempDir::new().unwrap();

    cli()
        .current_dir(td.path())
        .arg("list-repos")
        .assert()
        .success()
        .stdout(predicate::str::contains("NextJS Clean"));
}
