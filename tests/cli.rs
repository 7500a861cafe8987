// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! CLI smoke tests. Nothing here touches the network.

use assert_cmd::Command;

fn xraylc() -> Command {
    Command::cargo_bin("xraylc").unwrap()
}

#[test]
fn help_is_available() {
    xraylc().arg("--help").assert().success();
    xraylc().args(["maxi", "--help"]).assert().success();
    xraylc().args(["swift", "--help"]).assert().success();
}

#[test]
fn no_subcommand_is_a_usage_error() {
    xraylc().assert().failure().code(2);
}

#[test]
fn source_is_required() {
    xraylc().arg("maxi").assert().failure().code(2);
    xraylc().arg("swift").assert().failure().code(2);
}

#[test]
fn unknown_subcommand_is_rejected() {
    xraylc().arg("chandra").assert().failure().code(2);
}

#[test]
fn swift_bounds_must_be_numeric() {
    xraylc()
        .args(["swift", "-s", "GX 339-4", "--start", "yesterday"])
        .assert()
        .failure()
        .code(2);
}
