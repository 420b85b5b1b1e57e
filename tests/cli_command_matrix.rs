use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

#[test]
fn help_lists_every_flag() {
    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--input"))
        .stdout(contains("--json"))
        .stdout(contains("--verbose"));
}

#[test]
fn single_dash_help_still_works() {
    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("-help").assert().success().stdout(contains("--input"));
}

#[test]
fn version_flag_reports_package_version() {
    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
