use std::fmt;

use crate::inspect::Address;

/// One step from a parent node to a child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Named struct field.
	Field(Box<str>),
	/// Zero-based array element.
	Index(usize),
	/// Pointer dereference into the node at an address.
	Deref(Address),
}

/// Location of a node inside the tree being inspected.
///
/// Renders as `$.field[3]->#target.field`.
#[derive(Debug, Clone, Default)]
pub struct NodePath {
	/// Ordered steps from the root.
	pub steps: Vec<PathStep>,
}

impl NodePath {
	/// Path rooted at the top-level value.
	pub fn root() -> Self {
		Self::default()
	}

	/// Append one step.
	pub fn push(&mut self, step: PathStep) {
		self.steps.push(step);
	}

	/// Remove the last step.
	pub fn pop(&mut self) {
		self.steps.pop();
	}

	/// Copy of this path extended by `step`.
	pub fn join(&self, step: PathStep) -> Self {
		let mut out = self.clone();
		out.push(step);
		out
	}
}

impl fmt::Display for NodePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for step in &self.steps {
			match step {
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
				PathStep::Deref(address) => write!(f, "->#{address}")?,
			}
		}
		Ok(())
	}
}
