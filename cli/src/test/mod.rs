#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::{
    predicate::str::{contains, is_empty},
    PredicateBooleanExt,
};

mod recipe_operations;

#[test]
fn test_profile_arg() {
    // Test that --profile arg overrides LARDER_PROFILE env var
    let mut cmd = Command::cargo_bin("larder").unwrap();

    let assert = cmd
        .env("LARDER_PROFILE", "wrong_profile")
        .args(["--profile", "test_profile_arg"])
        .arg("config")
        .assert();

    assert
        .success()
        .stdout(
            contains(r#""profile_name": "test_profile_arg""#)
                .and(contains(r#""db_path""#)),
        )
        .stderr(is_empty());
}

#[test]
fn test_profile_env() {
    // Test that LARDER_PROFILE env var sets the profile name
    let mut cmd = Command::cargo_bin("larder").unwrap();

    let assert = cmd
        .env("LARDER_PROFILE", "test_profile_env")
        .arg("config")
        .assert();

    assert
        .success()
        .stdout(
            contains(r#""profile_name": "test_profile_env""#)
                .and(contains(r#""db_path""#)),
        )
        .stderr(is_empty());
}
