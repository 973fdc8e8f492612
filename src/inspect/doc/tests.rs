use crate::inspect::{Address, Document, InspectError, Inspector, Value};

const CIRCULAR: &str = r#"{
	"root": "circular_a",
	"nodes": [
		{ "address": "circular_a", "value": { "kind": "struct", "name": "CircularPointer", "fields": [
			{ "name": "value", "value": { "kind": "int", "width": 32, "value": 17 } },
			{ "name": "ptr", "value": { "kind": "pointer", "target_type": "CircularPointer", "target": "circular_b" } }
		] } },
		{ "address": "circular_b", "value": { "kind": "struct", "name": "CircularPointer", "fields": [
			{ "name": "value", "value": { "kind": "int", "width": 32, "value": 18 } },
			{ "name": "ptr", "value": { "kind": "pointer", "target_type": "CircularPointer", "target": "circular_a" } }
		] } }
	]
}"#;

#[test]
fn circular_document_loads_and_renders() {
	let loaded = Document::from_json(CIRCULAR).expect("json parses").load().expect("document loads");
	assert_eq!(loaded.snapshot.len(), 2);
	let root = loaded.root.expect("root is set");
	assert_eq!(root, Address::label("circular_a"));

	let rendering = Inspector::default().render_at(&loaded.snapshot, &root).expect("render succeeds");
	assert_eq!(
		rendering.to_string(),
		"CircularPointer { value: 17, ptr: CircularPointer { value: 18, ptr: <cycle -> #circular_a> } }"
	);
}

#[test]
fn inline_value_kinds_convert() {
	let json = r#"{ "value": { "kind": "struct", "name": "Mixed", "fields": [
		{ "name": "c", "value": { "kind": "char", "value": 65 } },
		{ "name": "r", "value": { "kind": "rune", "value": "R" } },
		{ "name": "f", "value": { "kind": "float", "width": 32, "value": 2.5 } },
		{ "name": "u", "value": { "kind": "int", "width": 128, "signed": false, "value": "12345678901234567890" } },
		{ "name": "s", "value": { "kind": "string", "value": "yes", "owned": true, "terminator": "nul" } },
		{ "name": "e", "value": { "kind": "enum", "name": "TestEnum", "variants": [ { "name": "ONE", "value": 0 } ], "value": 0 } },
		{ "name": "p", "value": { "kind": "pointer", "target_type": "int" } },
		{ "name": "a", "value": { "kind": "array", "element_type": "int" } }
	] } }"#;

	let loaded = Document::from_json(json).expect("json parses").load().expect("document loads");
	let value = loaded.value.expect("inline value");
	let rendering = Inspector::default().render(&value, &loaded.snapshot).expect("render succeeds");
	assert_eq!(
		rendering.to_string(),
		"Mixed { c: 65, r: 'R', f: 2.5, u: 12345678901234567890, s: \"yes\", e: ONE, p: <null>, a: [] }"
	);
}

#[test]
fn raw_hex_addresses_parse_as_raw() {
	let json = r#"{ "root": "0x1000", "nodes": [ { "address": "0x1000", "value": { "kind": "bool", "value": true } } ] }"#;
	let loaded = Document::from_json(json).expect("json parses").load().expect("document loads");
	assert_eq!(loaded.root, Some(Address::raw(0x1000)));
	assert_eq!(loaded.snapshot.get(&Address::raw(0x1000)), Some(&Value::Bool(true)));
}

#[test]
fn integer_out_of_range_reports_document_path() {
	let json = r#"{ "nodes": [ { "address": "x", "value": { "kind": "struct", "name": "S", "fields": [
		{ "name": "small", "value": { "kind": "int", "width": 8, "value": 300 } }
	] } } ] }"#;
	let err = Document::from_json(json).expect("json parses").load().expect_err("300 does not fit i8");
	match err {
		InspectError::InvalidDocument { path, .. } => assert_eq!(path, "$->#x.small"),
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn unsupported_width_is_rejected() {
	let json = r#"{ "value": { "kind": "float", "width": 16, "value": 1.0 } }"#;
	let err = Document::from_json(json).expect("json parses").load().expect_err("f16 is unsupported");
	assert!(matches!(err, InspectError::InvalidDocument { .. }));
}

#[test]
fn duplicate_and_unknown_roots_are_rejected() {
	let duplicate = r#"{ "nodes": [
		{ "address": "a", "value": { "kind": "bool", "value": true } },
		{ "address": "a", "value": { "kind": "bool", "value": false } }
	] }"#;
	let err = Document::from_json(duplicate).expect("json parses").load().expect_err("duplicate address");
	assert!(matches!(err, InspectError::DuplicateAddress { .. }));

	let unknown = r#"{ "root": "missing" }"#;
	let err = Document::from_json(unknown).expect("json parses").load().expect_err("unknown root");
	assert!(matches!(err, InspectError::UnknownAddress { .. }));
}

#[test]
fn unknown_kind_is_a_json_error() {
	let err = Document::from_json(r#"{ "value": { "kind": "tuple" } }"#).expect_err("unknown kind");
	assert!(matches!(err, InspectError::Json(_)));
}

#[test]
fn misspelled_keys_are_rejected() {
	let node_typo = r#"{ "nodes": [ { "address": "a", "adress_typo": 1, "value": { "kind": "bool", "value": true } } ] }"#;
	let err = Document::from_json(node_typo).expect_err("unknown node key");
	assert!(matches!(err, InspectError::Json(_)));

	let value_typo = r#"{ "value": { "kind": "int", "width": 8, "signd": false, "value": 200 } }"#;
	let err = Document::from_json(value_typo).expect_err("unknown value key");
	assert!(err.to_string().contains("signd"), "unexpected error: {err}");

	let field_typo = r#"{ "value": { "kind": "struct", "name": "S", "fields": [ { "name": "x", "vlaue": { "kind": "bool", "value": true } } ] } }"#;
	assert!(Document::from_json(field_typo).is_err());

	let variant_typo = r#"{ "value": { "kind": "enum", "name": "E", "variants": [ { "name": "A", "value": 0, "extra": 1 } ], "value": 0 } }"#;
	assert!(Document::from_json(variant_typo).is_err());
}

#[test]
fn f32_literal_out_of_range_is_rejected() {
	let json = r#"{ "nodes": [ { "address": "x", "value": { "kind": "float", "width": 32, "value": 1e300 } } ] }"#;
	let err = Document::from_json(json).expect("json parses").load().expect_err("1e300 does not fit f32");
	match err {
		InspectError::InvalidDocument { path, .. } => assert_eq!(path, "$->#x"),
		other => panic!("unexpected error: {other:?}"),
	}

	let wide = r#"{ "value": { "kind": "float", "width": 64, "value": 1e300 } }"#;
	let loaded = Document::from_json(wide).expect("json parses").load().expect("f64 holds 1e300");
	assert!(loaded.value.is_some());
}

#[test]
fn string_with_value_and_bytes_is_rejected() {
	let json = r#"{ "value": { "kind": "string", "value": "yes", "bytes": [110, 111] } }"#;
	let err = Document::from_json(json).expect("json parses").load().expect_err("ambiguous string");
	assert!(matches!(err, InspectError::InvalidDocument { .. }));
}
