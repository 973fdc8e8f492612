use std::fmt;

use serde::Serialize;

/// Non-error conditions that render as sentinel fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
	/// `<null>`
	Null,
	/// `<cycle -> #id>`
	Cycle,
	/// `<dangling -> #id>`
	Dangling,
	/// `<max-depth-exceeded>`
	MaxDepth,
	/// `<unknown-variant:#n>`
	UnknownVariant,
	/// `... n more`
	Elided,
}

/// Role of one output fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
	/// Scalar literal.
	Literal,
	/// Type, field, variant, or address name.
	Name,
	/// Structural punctuation.
	Punct,
	/// Layout whitespace.
	Space,
	/// Sentinel.
	Marker(Marker),
}

/// One piece of a rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
	/// Fragment role.
	pub kind: FragmentKind,
	/// Output text.
	pub text: Box<str>,
}

/// Immutable output of one inspection call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rendering {
	fragments: Vec<Fragment>,
}

impl Rendering {
	pub(crate) fn from_fragments(fragments: Vec<Fragment>) -> Self {
		Self { fragments }
	}

	/// Fragments in output order.
	pub fn fragments(&self) -> &[Fragment] {
		&self.fragments
	}

	/// Fragments of one marker kind.
	pub fn markers(&self, marker: Marker) -> impl Iterator<Item = &Fragment> {
		self.fragments.iter().filter(move |item| item.kind == FragmentKind::Marker(marker))
	}
}

impl fmt::Display for Rendering {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for fragment in &self.fragments {
			f.write_str(&fragment.text)?;
		}
		Ok(())
	}
}
