use crate::harness::{TestContext, assert_lint_clean};
use predicates::prelude::*;
use std::fs;

/// Accept every borgmatic default and decline encryption.
const BORGMATIC_DEFAULTS_UNENCRYPTED: &str = "\n\n\n\nno\n\n\n\n\n\n\n";

fn yaml(content: &str) -> serde_yaml::Value {
    serde_yaml::from_str(content).unwrap_or_else(|e| panic!("invalid YAML ({e}):\n{content}"))
}

#[test]
fn borgmatic_defaults_render_a_valid_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "--output", "borg.yaml"])
        .write_stdin(BORGMATIC_DEFAULTS_UNENCRYPTED)
        .assert()
        .success()
        .stdout(predicate::str::contains("Borgmatic Configuration Wizard"))
        .stdout(predicate::str::contains("Configuration saved to borg.yaml."))
        .stdout(predicate::str::contains("borgmatic init --encryption=none"));

    let content = ctx.read_output("borg.yaml");
    assert!(
        content.starts_with("# borgmatic configuration for localhost\n# Generated by scaffoldr on ")
    );

    let parsed = yaml(&content);
    let sources: Vec<_> = parsed["source_directories"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(sources, ["/etc", "/home"]);
    assert_eq!(
        parsed["repositories"][0]["path"].as_str(),
        Some("ssh://backup@nas.local/./localhost")
    );
    assert_eq!(parsed["archive_name_format"].as_str(), Some("{hostname}-{now}"));
    assert_eq!(parsed["keep_daily"].as_u64(), Some(7));
    assert_eq!(parsed["checks"][1]["frequency"].as_str(), Some("2 weeks"));
    assert!(parsed.get("encryption_passphrase").is_none());

    assert_lint_clean(&ctx.work_dir().join("borg.yaml"));
}

#[test]
fn borgmatic_passphrase_is_escaped_and_feeds_the_init_note() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin("\n\n\n\n\ns3cr: et #1\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("borgmatic init --encryption='s3cr: et #1'"));

    let parsed = yaml(&ctx.read_output("borg.yaml"));
    assert_eq!(parsed["encryption_passphrase"].as_str(), Some("s3cr: et #1"));

    assert_lint_clean(&ctx.work_dir().join("borg.yaml"));
}

#[test]
fn autorestic_defaults_render_a_valid_configuration() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "autorestic", "generate", "-o", ".autorestic.yml"])
        .write_stdin("\n\n\n\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("autorestic backup -c .autorestic.yml -l home"));

    let parsed = yaml(&ctx.read_output(".autorestic.yml"));
    assert_eq!(parsed["version"].as_u64(), Some(2));
    assert_eq!(parsed["locations"]["home"]["from"][0].as_str(), Some("/home"));
    assert_eq!(parsed["locations"]["home"]["to"][0].as_str(), Some("local"));
    assert_eq!(parsed["locations"]["home"]["cron"].as_str(), Some("0 3 * * *"));
    assert_eq!(parsed["backends"]["local"]["path"].as_str(), Some("/mnt/backup/home"));
    assert!(parsed["backends"]["local"].get("key").is_none());

    assert_lint_clean(&ctx.work_dir().join(".autorestic.yml"));
}

#[test]
fn numeric_looking_secrets_stay_strings() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin("\n\n\n\n\n12345\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("borgmatic init --encryption='12345'"));

    let content = ctx.read_output("borg.yaml");
    assert!(content.contains("encryption_passphrase: \"12345\""), "{content}");
    let parsed = yaml(&content);
    assert_eq!(parsed["encryption_passphrase"].as_str(), Some("12345"));
    assert_eq!(parsed["keep_daily"].as_u64(), Some(7));
    assert_lint_clean(&ctx.work_dir().join("borg.yaml"));

    ctx.cli()
        .args(["backup", "autorestic", "generate", "-o", ".autorestic.yml"])
        .write_stdin("\n\n\n\n\n\n12345\n\n\n\n")
        .assert()
        .success();

    let parsed = yaml(&ctx.read_output(".autorestic.yml"));
    assert_eq!(parsed["backends"]["local"]["key"].as_str(), Some("12345"));
    assert_eq!(parsed["locations"]["home"]["options"]["forget"]["keep-daily"].as_u64(), Some(7));
    assert_lint_clean(&ctx.work_dir().join(".autorestic.yml"));
}

#[test]
fn autorestic_output_path_defaults_to_its_own_file_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "autorestic", "generate"])
        .write_stdin("\n\n\n\n\n\n\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("autorestic backup -c autorestic.yml -l home"));

    assert!(ctx.work_dir().join("autorestic.yml").exists());
    assert!(!ctx.work_dir().join("autorestic.yaml").exists());
}

#[test]
fn invalid_answers_are_asked_again() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin("bad host!\nvault\n\n\n\nno\nbrotli\n\n\nlots\n\n\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("❌"));

    let parsed = yaml(&ctx.read_output("borg.yaml"));
    assert_eq!(parsed["repositories"][0]["label"].as_str(), Some("vault-offsite"));
    assert_eq!(parsed["compression"].as_str(), Some("lz4"));
    assert_eq!(parsed["keep_daily"].as_u64(), Some(7));
}

#[test]
fn output_path_is_asked_when_not_given() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate"])
        .write_stdin(format!("{BORGMATIC_DEFAULTS_UNENCRYPTED}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Output file path"));

    assert!(ctx.work_dir().join("borgmatic.yaml").exists());
}

#[test]
fn declined_overwrite_leaves_existing_file() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("borg.yaml"), "original: true\n").unwrap();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin(format!("{BORGMATIC_DEFAULTS_UNENCRYPTED}n\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Operation cancelled by user."));

    assert_eq!(ctx.read_output("borg.yaml"), "original: true\n");
}

#[test]
fn confirmed_overwrite_replaces_existing_file() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("borg.yaml"), "original: true\n").unwrap();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin(format!("{BORGMATIC_DEFAULTS_UNENCRYPTED}y\n"))
        .assert()
        .success();

    assert!(ctx.read_output("borg.yaml").contains("source_directories:"));
}

#[test]
fn end_of_input_cancels_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["backup", "borgmatic", "generate", "-o", "borg.yaml"])
        .write_stdin("vault\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration cancelled."));

    assert!(!ctx.work_dir().join("borg.yaml").exists());
}

#[test]
fn malformed_definition_exits_with_failure() {
    let ctx = TestContext::new();
    ctx.write_tool("misc", "broken", "heading: [unclosed", "x: 1\n");

    ctx.cli_with_definitions()
        .args(["misc", "broken", "generate", "-o", "out.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not parse definition file"));

    assert!(!ctx.work_dir().join("out.yaml").exists());
}

#[test]
fn render_failure_uses_the_definition_error_message() {
    let ctx = TestContext::new();
    ctx.write_tool(
        "misc",
        "faulty",
        r#"
heading:
  before:
    - prompts:
        - key: name
          prompt: Name
          default: db1
  after:
    logs:
      error: "Could not build {name}: {e}"
"#,
        "name: {% if %}\n",
    );

    ctx.cli_with_definitions()
        .args(["misc", "faulty", "generate", "-o", "out.yaml"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Could not build db1:"));

    assert!(!ctx.work_dir().join("out.yaml").exists());
}

#[test]
fn custom_template_sees_timestamp_and_output_path() {
    let ctx = TestContext::new();
    ctx.write_tool(
        "misc",
        "stamp",
        "heading:\n  before:\n    - prompts:\n        - key: name\n          prompt: Name\n",
        "name: {{ name }}\npath: {{ output_path }}\nat: {{ generation_timestamp }}\n",
    );

    ctx.cli_with_definitions()
        .args(["misc", "stamp", "generate", "-o", "nested/out.yaml"])
        .write_stdin("db1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created configuration file."));

    let parsed = yaml(&ctx.read_output("nested/out.yaml"));
    assert_eq!(parsed["name"].as_str(), Some("db1"));
    assert_eq!(parsed["path"].as_str(), Some("nested/out.yaml"));
    let stamp = parsed["at"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
}
