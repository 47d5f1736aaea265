use json_tree::escape::{unescape, write_escaped};
use json_tree::{parse, JsonArray, JsonObject, JsonPrinter, JsonValue};
use json_tree_buffers::Writer;
use proptest::prelude::*;

/// Arbitrary JSON trees. Numbers stay within ±1e6 so the fixed six-decimal
/// print format can represent them without rounding surprises.
fn value_strategy() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        (-1.0e6..1.0e6f64).prop_map(JsonValue::from),
        ".*".prop_map(|s: String| JsonValue::from(s)),
    ];
    leaf.prop_recursive(4, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(|items| {
                let mut array = JsonArray::new();
                for item in items {
                    array.push(item);
                }
                JsonValue::Array(array)
            }),
            prop::collection::vec((".*", inner), 0..6).prop_map(|members| {
                let mut object = JsonObject::new();
                for (key, value) in members {
                    object.insert(key, value);
                }
                JsonValue::Object(object)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn print_parse_print_is_stable(tree in value_strategy()) {
        let mut printer = JsonPrinter::new();
        let first = printer.print(&tree);
        let reparsed = parse(&first).unwrap();
        let second = printer.print(&reparsed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn ascii_print_round_trips(tree in value_strategy()) {
        let text = JsonPrinter::new().ascii(true).print(&tree);
        // ASCII mode only affects string values, never structure; parsing
        // the escaped form and printing normally must match the normal
        // printing of the original tree.
        let reparsed = parse(&text).unwrap();
        let mut printer = JsonPrinter::new();
        prop_assert_eq!(printer.print(&reparsed), printer.print(&tree));
    }

    #[test]
    fn escaped_string_survives_unescape(payload in ".*") {
        let mut writer = Writer::new();
        write_escaped(&mut writer, payload.as_bytes(), false);
        let text = writer.flush();
        let interior = &text[1..text.len() - 1];
        let back = unescape(interior).unwrap();
        prop_assert_eq!(back.as_str(), Some(payload.as_str()));
    }

    #[test]
    fn parsed_string_literal_never_panics(raw in "\\PC*") {
        // Arbitrary quoted content either parses or fails cleanly.
        let mut input = Vec::new();
        input.push(b'"');
        input.extend_from_slice(raw.as_bytes());
        input.push(b'"');
        let _ = parse(&input);
    }
}
