//! Layered configuration as seen through `config dump`.

use super::test_utils::{json_stdout, stderr, Sandbox};

#[test]
fn test_missing_config_file_continues_with_defaults() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--config-file=missing.yml", "--format", "json", "config", "dump"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let doc = json_stdout(&output);
    assert_eq!(doc["proxy_type"], "auto");
    assert!(doc["sketchbook_path"]
        .as_str()
        .unwrap()
        .starts_with(sandbox.home().to_str().unwrap()));
}

#[test]
fn test_conventional_config_file_is_used() {
    let sandbox = Sandbox::new();
    sandbox.write(".cli-config.yml", "sketchbook_path: /srv/sketches\n");

    let doc = json_stdout(&sandbox.run(&["--format", "json", "config", "dump"]));
    assert_eq!(doc["sketchbook_path"], "/srv/sketches");
}

#[test]
fn test_environment_overrides_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.write(
        "conf/cli.yml",
        "sketchbook_path: /from/file\nproxy_type: manual\n",
    );

    let output = sandbox.run_with_env(
        &[
            "--config-file",
            file.to_str().unwrap(),
            "--format",
            "json",
            "config",
            "dump",
        ],
        &[
            ("BOARDKIT_SKETCHBOOK_PATH", "/from/env"),
            (
                "BOARDKIT_BOARD_MANAGER__ADDITIONAL_URLS",
                "https://a.example/index.json,https://b.example/index.json",
            ),
        ],
    );

    let doc = json_stdout(&output);
    assert_eq!(doc["sketchbook_path"], "/from/env");
    assert_eq!(doc["proxy_type"], "manual");
    assert_eq!(
        doc["board_manager"]["additional_urls"],
        serde_json::json!(["https://a.example/index.json", "https://b.example/index.json"])
    );
}

#[test]
fn test_malformed_config_file_is_not_fatal() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("broken.yml", "sketchbook_path: [oops\n");

    let output = sandbox.run(&[
        "--debug",
        "--config-file",
        file.to_str().unwrap(),
        "config",
        "dump",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Did not manage to get config file"));
}

#[test]
fn test_config_init_then_dump_round_trip() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_env(
        &["config", "init", "--save-as", "saved/cli.yml"],
        &[("BOARDKIT_PROXY_TYPE", "none")],
    );
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let saved = sandbox.path().join("saved").join("cli.yml");
    let doc = json_stdout(&sandbox.run(&[
        "--config-file",
        saved.to_str().unwrap(),
        "--format",
        "json",
        "config",
        "dump",
    ]));
    assert_eq!(doc["proxy_type"], "none");
}
