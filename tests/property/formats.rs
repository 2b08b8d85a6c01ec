//! Formatter selection accepts exactly two names; JSON output is always one valid document.

use boardkit::error::OutputError;
use boardkit::output::Output;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn test_only_text_and_json_are_selectable_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |name| {
            let result = Output::select(&name, false);
            match name.as_str() {
                "text" | "json" => prop_assert!(result.is_ok()),
                _ => prop_assert_eq!(result.unwrap_err(), OutputError::InvalidFormat(name.clone())),
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_json_mapping_output_is_one_document_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::btree_map(".*", any::<i64>(), 0..8),
            |map: BTreeMap<String, i64>| {
                let output = Output::select("json", true).unwrap();
                let mut out = Vec::new();
                output.print_to(&map, &mut out).unwrap();

                let text = String::from_utf8(out).unwrap();
                prop_assert_eq!(text.matches('\n').count(), 1);
                let parsed: BTreeMap<String, i64> = serde_json::from_str(text.trim_end()).unwrap();
                prop_assert_eq!(parsed, map);
                Ok(())
            },
        )
        .unwrap();
}
