use std::collections::HashMap;

use crate::inspect::{Address, Value};

/// Frozen memory image that pointer targets resolve into.
///
/// Nodes keep insertion order so listings are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	slots: HashMap<Address, usize>,
	nodes: Vec<(Address, Value)>,
}

impl Snapshot {
	/// Create an empty snapshot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `value` at `address`, returning the value it replaced.
	pub fn insert(&mut self, address: Address, value: Value) -> Option<Value> {
		if let Some(slot) = self.slots.get(&address) {
			return Some(std::mem::replace(&mut self.nodes[*slot].1, value));
		}
		self.slots.insert(address.clone(), self.nodes.len());
		self.nodes.push((address, value));
		None
	}

	/// Builder-style [`Snapshot::insert`].
	pub fn with(mut self, address: Address, value: Value) -> Self {
		self.insert(address, value);
		self
	}

	/// Look up the node at `address`.
	pub fn get(&self, address: &Address) -> Option<&Value> {
		self.slots.get(address).map(|slot| &self.nodes[*slot].1)
	}

	/// Look up a node and return the snapshot's own copy of its address.
	pub fn get_entry(&self, address: &Address) -> Option<(&Address, &Value)> {
		self.slots.get(address).map(|slot| {
			let (address, value) = &self.nodes[*slot];
			(address, value)
		})
	}

	/// Whether a node exists at `address`.
	pub fn contains(&self, address: &Address) -> bool {
		self.slots.contains_key(address)
	}

	/// Number of stored nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the snapshot is empty.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Addresses in insertion order.
	pub fn addresses(&self) -> impl Iterator<Item = &Address> {
		self.nodes.iter().map(|(address, _)| address)
	}
}
