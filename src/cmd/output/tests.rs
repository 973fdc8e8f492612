use valprint::inspect::{FloatFormat, Inspector, Layout, Snapshot, fixtures};

use super::{FloatFormatArg, InspectArgs, Rendered, rendered_json, rendered_text};

#[test]
fn flags_override_default_options() {
	let args = InspectArgs {
		max_depth: Some(3),
		float_format: Some(FloatFormatArg::Scientific),
		float_precision: Some(2),
		truncate_string_at: Some(10),
		max_array: Some(4),
		annotate_ptrs: true,
		pretty: true,
		json: false,
	};

	let options = args.options();
	assert_eq!(options.max_depth, 3);
	assert_eq!(options.float_format, FloatFormat::Scientific);
	assert_eq!(options.float_precision, Some(2));
	assert_eq!(options.truncate_string_at, 10);
	assert_eq!(options.max_array_items, Some(4));
	assert!(options.annotate_pointers);
	assert_eq!(options.layout, Layout::Pretty);
}

#[test]
fn no_flags_keep_defaults() {
	let options = InspectArgs::default().options();
	assert_eq!(options.max_depth, 64);
	assert_eq!(options.layout, Layout::Compact);
	assert_eq!(options.max_array_items, None);
}

#[test]
fn text_output_labels_each_root() {
	let fixture = fixtures::circular();
	let rendered: Vec<Rendered> = fixture
		.render_all(&Inspector::default())
		.expect("fixture renders")
		.into_iter()
		.map(|(address, rendering)| Rendered {
			label: address.to_string(),
			rendering,
		})
		.collect();

	let text = rendered_text(&rendered);
	let mut lines = text.lines();
	assert_eq!(
		lines.next(),
		Some("circular_a = CircularPointer { value: 17, ptr: CircularPointer { value: 18, ptr: <cycle -> #circular_a> } }")
	);
	assert_eq!(
		lines.next(),
		Some("circular_b = CircularPointer { value: 18, ptr: CircularPointer { value: 17, ptr: <cycle -> #circular_b> } }")
	);
	assert_eq!(lines.next(), None);
}

#[test]
fn json_output_carries_fragments() {
	let rendering = Inspector::default()
		.render(&valprint::inspect::Value::null_pointer("Node"), &Snapshot::new())
		.expect("render succeeds");
	let json = rendered_json(&[Rendered {
		label: "value".to_owned(),
		rendering,
	}])
	.expect("json serializes");

	let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
	assert_eq!(parsed[0]["root"], "value");
	assert_eq!(parsed[0]["rendering"], "<null>");
	assert_eq!(parsed[0]["fragments"][0]["kind"]["marker"], "null");
	assert_eq!(parsed[0]["fragments"][0]["text"], "<null>");
}
