#![allow(missing_docs)]

use valprint::inspect::{Address, Inspector, IntWidth, Marker, Snapshot, Value, fixtures};

fn ring(len: usize) -> Snapshot {
	let mut snapshot = Snapshot::new();
	for idx in 0..len {
		let next = Address::label(format!("n{}", (idx + 1) % len));
		snapshot.insert(
			Address::label(format!("n{idx}")),
			Value::structure("Node", [("id", Value::unsigned(IntWidth::W32, idx as u128)), ("next", Value::pointer("Node", next))]),
		);
	}
	snapshot
}

#[test]
fn circular_pair_matches_expected_rendering() {
	let fixture = fixtures::circular();
	let rendering = Inspector::default()
		.render_at(&fixture.snapshot, &Address::label("circular_a"))
		.expect("render succeeds");

	assert_eq!(rendering.to_string(), "CircularPointer { value: 17, ptr: CircularPointer { value: 18, ptr: <cycle -> #circular_a> } }");
	assert_eq!(rendering.markers(Marker::Cycle).count(), 1);
}

#[test]
fn rings_of_any_length_terminate_with_one_cycle_marker() {
	for len in [1_usize, 2, 3, 17, 30] {
		let snapshot = ring(len);
		let rendering = Inspector::default()
			.render_at(&snapshot, &Address::label("n0"))
			.expect("render succeeds");

		assert_eq!(rendering.markers(Marker::Cycle).count(), 1, "ring of {len}");
		assert!(rendering.to_string().ends_with(&format!("next: <cycle -> #n0>{}", " }".repeat(len))));
		assert_eq!(rendering.to_string().matches("Node {").count(), len);
	}
}

#[test]
fn pointer_root_into_ring_reports_reentered_node() {
	let snapshot = ring(2);
	let rendering = Inspector::default()
		.render(&Value::pointer("Node", Address::label("n1")), &snapshot)
		.expect("render succeeds");

	assert_eq!(rendering.to_string(), "Node { id: 1, next: Node { id: 0, next: <cycle -> #n1> } }");
}

#[test]
fn concurrent_renders_share_nothing() {
	let snapshot = ring(8);
	let inspector = Inspector::default();
	let expected = inspector.render_at(&snapshot, &Address::label("n0")).expect("render succeeds");

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(|| inspector.render_at(&snapshot, &Address::label("n0")).expect("render succeeds")))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().expect("thread joins"), expected);
		}
	});
}
