use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_prints_fields_grouped_by_section() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration Fields for Borgmatic"))
        .stdout(predicate::str::contains("Global Default"))
        .stdout(predicate::str::contains("Retention"))
        .stdout(predicate::str::contains("keep_daily"))
        .stdout(predicate::str::contains("encryption_passphrase"));
}

#[test]
fn tool_without_action_defaults_to_list() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "autorestic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration Fields for Autorestic"))
        .stdout(predicate::str::contains("backend_path"));
}

#[test]
fn missing_descriptions_and_titles_use_placeholders() {
    let ctx = TestContext::new();
    ctx.write_tool(
        "misc",
        "bare",
        "heading:\n  before:\n    - prompts:\n        - key: name\n          prompt: Name\n",
        "name: {{ name }}\n",
    );

    ctx.cli_with_definitions()
        .args(["misc", "bare", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"))
        .stdout(predicate::str::contains("No description provided."));
}

#[test]
fn malformed_definition_fails_listing() {
    let ctx = TestContext::new();
    ctx.write_tool("misc", "broken", "heading: [unclosed", "x: 1\n");

    ctx.cli_with_definitions()
        .args(["misc", "broken", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse definition file"));
}
