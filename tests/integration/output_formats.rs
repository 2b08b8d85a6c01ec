//! Text and JSON renderings of the consumer commands.

use super::test_utils::{json_stdout, stdout, Sandbox};

#[test]
fn test_version_text() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["version"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("boardkit version {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_config_dump_text_is_yaml() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["config", "dump"]);

    assert_eq!(output.status.code(), Some(0));
    let parsed: serde_yaml::Value = serde_yaml::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["proxy_type"], serde_yaml::Value::from("auto"));
}

#[test]
fn test_config_init_json_reports_path() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--format", "json", "config", "init"]);

    assert_eq!(output.status.code(), Some(0));
    let doc = json_stdout(&output);
    let path = std::path::PathBuf::from(doc["path"].as_str().unwrap());
    assert!(path.ends_with(".cli-config.yml"));
    assert!(path.is_file());
}
