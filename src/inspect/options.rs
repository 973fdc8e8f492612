use serde::{Deserialize, Serialize};

/// Float rendering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatFormat {
	/// Positional notation. Shortest round-trip digits unless a precision is set.
	#[default]
	Fixed,
	/// `1.5e3` notation.
	Scientific,
}

/// Whitespace layout of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
	/// Single line.
	#[default]
	Compact,
	/// One field or element per line, two-space indentation.
	Pretty,
}

/// Highest `max_depth` the inspector honors; larger settings are capped to it.
///
/// Traversal recurses once per level, so this bounds stack use.
pub const MAX_DEPTH_LIMIT: u32 = 512;

/// Limits and formatting switches for one inspector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOptions {
	/// Nodes nested deeper than this render as a depth-limit marker.
	/// Capped at [`MAX_DEPTH_LIMIT`].
	pub max_depth: u32,
	/// Float notation.
	pub float_format: FloatFormat,
	/// Fractional digits for floats; `None` keeps shortest round-trip digits.
	pub float_precision: Option<usize>,
	/// Bytes scanned for a NUL terminator; characters shown for sized strings.
	pub truncate_string_at: usize,
	/// Array elements shown before the rest is elided.
	pub max_array_items: Option<usize>,
	/// Prefix expanded pointer targets with their address.
	pub annotate_pointers: bool,
	/// Output layout.
	pub layout: Layout,
}

impl Default for InspectOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			float_format: FloatFormat::Fixed,
			float_precision: None,
			truncate_string_at: 4096,
			max_array_items: None,
			annotate_pointers: false,
			layout: Layout::Compact,
		}
	}
}

impl InspectOptions {
	/// `max_depth` capped at [`MAX_DEPTH_LIMIT`].
	pub fn depth_limit(&self) -> u32 {
		self.max_depth.min(MAX_DEPTH_LIMIT)
	}

	/// Preset for an interactive variables pane.
	pub fn for_terminal() -> Self {
		Self {
			max_depth: 8,
			float_format: FloatFormat::Fixed,
			float_precision: None,
			truncate_string_at: 200,
			max_array_items: Some(16),
			annotate_pointers: true,
			layout: Layout::Pretty,
		}
	}
}
