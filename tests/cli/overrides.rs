use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn global_defaults_appear_in_listing() {
    let ctx = TestContext::new();
    ctx.write_global_defaults("[borgmatic]\nhostname = \"vault\"\nkeep_daily = 14\n");

    ctx.cli()
        .args(["backup", "borgmatic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vault"))
        .stdout(predicate::str::contains("14"));
}

#[test]
fn global_defaults_replace_definition_defaults() {
    let ctx = TestContext::new();
    ctx.write_global_defaults("[Borgmatic]\nhostname = \"vault\"\nkeep_daily = 14\n");

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin("\n\n\n\nno\n\n\n\n\n\n\n")
        .assert()
        .success();

    let parsed: serde_yaml::Value = serde_yaml::from_str(&ctx.read_output("borg.yaml")).unwrap();
    assert_eq!(parsed["keep_daily"].as_u64(), Some(14));
    assert_eq!(
        parsed["repositories"][0]["path"].as_str(),
        Some("ssh://backup@nas.local/./vault")
    );
    assert_eq!(parsed["repositories"][0]["label"].as_str(), Some("vault-offsite"));
}

#[test]
fn unreadable_global_defaults_are_ignored() {
    let ctx = TestContext::new();
    ctx.write_global_defaults("this is [not toml");

    ctx.cli()
        .args(["backup", "borgmatic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hostname"));
}
