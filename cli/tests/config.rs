//! # ChainRS CLI Configuration Integration Tests
//!
//! File: cli/tests/config.rs
//!
//! ## Overview
//!
//! Verifies where the binary picks its configuration up from (explicit path,
//! environment variable, project file, user file) and how invalid
//! configuration is reported.
//!

mod common;
use common::*;
use predicates::prelude::*;

const ZOO: &str = r#"
chain = ["Cat", "Monkey", "Dog"]
subchain_from = "Monkey"
requests = ["Fish", "Banana"]

[[handlers]]
name = "Cat"
accepts = "Fish"
"#;

#[test]
fn test_explicit_config_flag() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("zoo.toml", ZOO);

    sandbox
        .cmd()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "Chain: Cat > Monkey > Dog\n\n\
             Client: Who wants a Fish\nCat: I'll eat the Fish\n\
             Client: Who wants a Banana\nMonkey: I'll eat the Banana\n",
        );
}

#[test]
fn test_config_from_environment() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("zoo.toml", ZOO);

    sandbox
        .cmd()
        .env("CHAINRS_CONFIG", &path)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Subchain: Monkey > Dog\n\nClient: Who wants a Fish\nFish was left untouched.\n",
        ));
}

#[test]
fn test_project_config_discovered() {
    let sandbox = Sandbox::new();
    sandbox.write(".chainrs.toml", "chain = [\"Dog\", \"Squirrel\"]\n");

    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Chain: Dog > Squirrel\n"));
}

#[test]
fn test_project_config_overrides_user_config() {
    let sandbox = Sandbox::new();
    sandbox.write_user_config("chain = [\"Dog\"]\nrequests = [\"MeatBall\"]\n");
    sandbox.write(".chainrs.toml", "requests = [\"Nut\"]\n");

    sandbox
        .cmd()
        .arg("run")
        .assert()
        .success()
        .stdout("Chain: Dog\n\nClient: Who wants a Nut\nNut was left untouched.\n");
}

#[test]
fn test_project_chain_wins_even_when_it_equals_the_default() {
    let sandbox = Sandbox::new();
    sandbox.write_user_config("chain = [\"Dog\"]\n");
    sandbox.write(
        ".chainrs.toml",
        "chain = [\"Monkey\", \"Squirrel\", \"Dog\"]\nrequests = [\"Banana\"]\n",
    );

    sandbox
        .cmd()
        .arg("run")
        .assert()
        .success()
        .stdout(
            "Chain: Monkey > Squirrel > Dog\n\n\
             Client: Who wants a Banana\nMonkey: I'll eat the Banana\n",
        );
}

#[test]
fn test_user_subchain_entry_dropped_with_user_chain() {
    let sandbox = Sandbox::new();
    sandbox.write_user_config("chain = [\"Dog\", \"Monkey\"]\nsubchain_from = \"Monkey\"\n");
    sandbox.write(".chainrs.toml", "chain = [\"Squirrel\", \"Dog\"]\n");

    sandbox
        .cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subchain: Dog\n"));
}

#[test]
fn test_subchain_entry_at_head_rejected() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("head.toml", "subchain_from = \"Monkey\"\n");

    sandbox
        .cmd()
        .args(["demo", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is the head of the chain"));
}

#[test]
fn test_unknown_handler_reported() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("bad.toml", "chain = [\"Monkey\", \"Owl\"]\n");

    sandbox
        .cmd()
        .args(["show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown handler 'Owl'"));
}

#[test]
fn test_unparseable_config_reported() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("bad.toml", "chain = \"Monkey\"\n");

    sandbox
        .cmd()
        .args(["demo", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_repeated_chain_entry_rejected() {
    let sandbox = Sandbox::new();
    let path = sandbox.write("loop.toml", "chain = [\"Monkey\", \"Dog\", \"Monkey\"]\n");

    sandbox
        .cmd()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears more than once"));
}
