//! Later layers win field by field; absent layers never erase earlier values.

use boardkit::config::{ConfigResolver, Defaults, IdeBundle};
use proptest::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn path_segment() -> impl Strategy<Value = String> {
    "s[a-z0-9_]{0,11}"
}

/// Plain strings, including digit-only ones that must not be read as numbers.
fn secret() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,6}", "[a-z][a-z0-9]{0,9}", "0[0-9]{1,4}"]
        .prop_filter("reserved words", |s| !matches!(s.as_str(), "true" | "false" | "null"))
}

/// Temp dir laid out as a portable IDE install hosting the executable.
fn bundled(temp_dir: &TempDir) -> Defaults {
    let ide_dir = temp_dir.path().join("ide");
    for dir in ["lib", "examples", "portable"] {
        std::fs::create_dir_all(ide_dir.join(dir)).unwrap();
    }
    let executable = ide_dir.join("boardkit");
    std::fs::write(&executable, b"").unwrap();

    Defaults::from_dirs(temp_dir.path().join("home"), temp_dir.path().to_path_buf())
        .with_ide(IdeBundle::detect(&executable))
}

#[test]
fn test_sketchbook_precedence_property() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 48,
        ..Default::default()
    });

    runner
        .run(
            &(
                proptest::option::of(path_segment()),
                proptest::option::of(path_segment()),
            ),
            |(from_file, from_env)| {
                let temp_dir = TempDir::new().unwrap();
                let defaults =
                    Defaults::from_dirs(temp_dir.path().join("home"), temp_dir.path().to_path_buf());
                let default_sketchbook = defaults.configuration().sketchbook_dir;

                if let Some(segment) = &from_file {
                    std::fs::write(
                        temp_dir.path().join(".cli-config.yml"),
                        format!("sketchbook_path: /file/{}\n", segment),
                    )
                    .unwrap();
                }
                let env: Vec<(String, String)> = from_env
                    .iter()
                    .map(|segment| {
                        (
                            "BOARDKIT_SKETCHBOOK_PATH".to_string(),
                            format!("/env/{}", segment),
                        )
                    })
                    .collect();

                let config = ConfigResolver::new()
                    .with_defaults(defaults)
                    .with_environment(env)
                    .resolve(None)
                    .unwrap();

                let expected = match (&from_file, &from_env) {
                    (_, Some(env)) => PathBuf::from(format!("/env/{}", env)),
                    (Some(file), None) => PathBuf::from(format!("/file/{}", file)),
                    (None, None) => default_sketchbook,
                };
                prop_assert_eq!(config.sketchbook_dir, expected);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_all_layers_precedence_property() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 48,
        ..Default::default()
    });

    runner
        .run(
            &(
                proptest::option::of(secret()),
                proptest::option::of(secret()),
                proptest::option::of(secret()),
            ),
            |(from_file, from_ide, from_env)| {
                let temp_dir = TempDir::new().unwrap();
                let defaults = bundled(&temp_dir);
                let base = defaults.configuration();

                if let Some(value) = &from_file {
                    std::fs::write(
                        temp_dir.path().join(".cli-config.yml"),
                        format!("proxy_manual_config:\n  password: '{}'\n", value),
                    )
                    .unwrap();
                }
                if let Some(value) = &from_ide {
                    std::fs::write(
                        base.ide_preferences_path(),
                        format!("proxy.manual.password={}\n", value),
                    )
                    .unwrap();
                }
                let env: Vec<(String, String)> = from_env
                    .iter()
                    .map(|value| {
                        (
                            "BOARDKIT_PROXY_MANUAL_CONFIG__PASSWORD".to_string(),
                            value.clone(),
                        )
                    })
                    .collect();

                let config = ConfigResolver::new()
                    .with_defaults(defaults)
                    .with_environment(env)
                    .resolve(None)
                    .unwrap();

                let expected = from_env
                    .or(from_ide)
                    .or(from_file)
                    .unwrap_or_else(|| base.proxy_manual_config.password.clone());
                prop_assert!(config.is_bundled_in_ide());
                prop_assert_eq!(config.proxy_manual_config.password, expected);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_file_layer_keeps_untouched_fields_property() {
    let mut runner = proptest::test_runner::TestRunner::new(proptest::test_runner::Config {
        cases: 32,
        ..Default::default()
    });

    runner
        .run(&path_segment(), |hostname| {
            let temp_dir = TempDir::new().unwrap();
            let defaults =
                Defaults::from_dirs(temp_dir.path().join("home"), temp_dir.path().to_path_buf());
            let base = defaults.configuration();
            std::fs::write(
                temp_dir.path().join(".cli-config.yml"),
                format!("proxy_manual_config:\n  hostname: {}\n", hostname),
            )
            .unwrap();

            let config = ConfigResolver::new()
                .with_defaults(defaults)
                .with_environment(Vec::<(String, String)>::new())
                .resolve(None)
                .unwrap();

            prop_assert_eq!(&config.proxy_manual_config.hostname, &hostname);
            prop_assert_eq!(&config.proxy_manual_config.username, &base.proxy_manual_config.username);
            prop_assert_eq!(&config.data_dir, &base.data_dir);
            prop_assert_eq!(&config.sketchbook_dir, &base.sketchbook_dir);
            Ok(())
        })
        .unwrap();
}
