//! Integration tests for error handling and exit codes.
//!
//! These tests verify that symscope returns the documented exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Path is not inside the scope
//! - Exit code 2: Argument parsing failed (clap)
//! - Exit code 4: Invalid arguments
//! - Exit code 6: Resolution error
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");

    env.resolve(&scope.join("anything"), &scope).assert().code(0);
}

// ============================================================================
// Scope Violations (Exit Code 1)
// ============================================================================

/// A path that does not start inside the scope is rejected, not clamped.
#[test]
fn test_path_outside_scope() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");
    let other = env.create_dir("other");

    env.resolve(&other.join("file"), &scope)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not within scope"));
}

#[test]
fn test_sibling_with_common_prefix_is_outside() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");
    let sibling = env.create_dir("rootfs2");

    env.resolve(&sibling, &scope).assert().code(1);
}

// ============================================================================
// Argument Errors (Exit Codes 2 and 4)
// ============================================================================

#[test]
fn test_missing_path_argument() {
    let env = TestEnv::new();
    env.command()
        .arg("resolve")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_zero_link_depth_rejected() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");

    env.resolve(&scope, &scope)
        .arg("--max-link-depth")
        .arg("0")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("max_link_depth"));
}

#[test]
fn test_other_user_home_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "~nobody/file"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("~user"));
}

// ============================================================================
// Resolution Errors (Exit Code 6)
// ============================================================================

#[test]
fn test_missing_scope() {
    let env = TestEnv::new();
    let scope = env.path().join("not-there");

    env.resolve(&scope.join("x"), &scope)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_scope_is_a_file() {
    let env = TestEnv::new();
    let file = env.write_config("plain-file", "data");

    env.resolve(&file.join("x"), &file)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("not a directory"));
}

#[cfg(unix)]
#[test]
fn test_symlink_loop() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");
    env.create_link("rootfs/loop", "/loop");

    env.resolve(&scope.join("loop"), &scope)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("too many levels of symbolic links"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_invalid_user_config() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");
    env.write_user_config("max_link_depth: [1, 2\n");

    env.resolve(&scope, &scope)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_field() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");
    let config = env.write_config("symscope.yaml", "follow_everything: true\n");

    env.resolve(&scope, &scope)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(7);
}

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");

    env.resolve(&scope, &scope)
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .assert()
        .code(7);
}

#[test]
fn test_invalid_env_value() {
    let env = TestEnv::new();
    let scope = env.create_dir("rootfs");

    env.resolve(&scope, &scope)
        .env("SYMSCOPE_MAX_LINK_DEPTH", "many")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("SYMSCOPE_MAX_LINK_DEPTH"));
}
