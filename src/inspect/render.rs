use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::inspect::{
	Address, ArrayValue, CharValue, EnumValue, FloatFormat, FloatValue, FloatWidth, Fragment, FragmentKind, InspectError, InspectOptions,
	IntegerValue, Layout, Marker, NodePath, PathStep, PointerValue, Rendering, Result, Snapshot, StringValue, StructValue, Terminator, Value,
};

/// Renders value trees under a fixed set of options.
///
/// Holds no per-call state, so one inspector can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
	options: InspectOptions,
}

impl Inspector {
	/// Create an inspector.
	pub fn new(options: InspectOptions) -> Self {
		Self { options }
	}

	/// Options this inspector renders with.
	pub fn options(&self) -> &InspectOptions {
		&self.options
	}

	/// Render `value`, resolving pointers through `snapshot`.
	pub fn render(&self, value: &Value, snapshot: &Snapshot) -> Result<Rendering> {
		let mut walker = Walker::new(&self.options, snapshot);
		walker.value(value, 0)?;
		Ok(walker.finish())
	}

	/// Render the node stored at `address`.
	///
	/// The root's own address is on the traversal path, so pointers back to it
	/// render as a cycle marker.
	pub fn render_at(&self, snapshot: &Snapshot, address: &Address) -> Result<Rendering> {
		let (address, value) = snapshot.get_entry(address).ok_or_else(|| InspectError::UnknownAddress {
			address: address.to_string(),
		})?;
		let mut walker = Walker::new(&self.options, snapshot);
		walker.visited.insert(address);
		walker.value(value, 0)?;
		Ok(walker.finish())
	}
}

/// Render `value` with one-off options.
pub fn render_value(value: &Value, snapshot: &Snapshot, options: &InspectOptions) -> Result<Rendering> {
	let mut walker = Walker::new(options, snapshot);
	walker.value(value, 0)?;
	Ok(walker.finish())
}

struct Walker<'a> {
	options: &'a InspectOptions,
	max_depth: u32,
	snapshot: &'a Snapshot,
	visited: HashSet<&'a Address>,
	path: NodePath,
	indent: usize,
	out: Vec<Fragment>,
}

impl<'a> Walker<'a> {
	fn new(options: &'a InspectOptions, snapshot: &'a Snapshot) -> Self {
		Self {
			options,
			max_depth: options.depth_limit(),
			snapshot,
			visited: HashSet::new(),
			path: NodePath::root(),
			indent: 0,
			out: Vec::new(),
		}
	}

	fn finish(self) -> Rendering {
		Rendering::from_fragments(self.out)
	}

	fn value(&mut self, value: &'a Value, depth: u32) -> Result<()> {
		if depth > self.max_depth {
			debug!(path = %self.path, max_depth = self.max_depth, "depth limit reached");
			self.marker(Marker::MaxDepth, "<max-depth-exceeded>".to_owned());
			return Ok(());
		}

		match value {
			Value::Integer(item) => self.integer(item),
			Value::Float(item) => self.float(item),
			Value::Char(item) => self.character(*item),
			Value::Bool(item) => {
				self.emit(FragmentKind::Literal, item.to_string());
				Ok(())
			}
			Value::String(item) => self.string(item),
			Value::Array(item) => self.array(item, depth),
			Value::Struct(item) => self.structure(item, depth),
			Value::Enum(item) => {
				self.enumeration(item);
				Ok(())
			}
			Value::Pointer(item) => self.pointer(item, depth),
		}
	}

	fn integer(&mut self, item: &IntegerValue) -> Result<()> {
		if !item.fits() {
			return Err(self.malformed(format!("integer bits 0x{:x} exceed width {}", item.bits, item.width.bits())));
		}
		let text = if item.signed { item.as_i128().to_string() } else { item.bits.to_string() };
		self.emit(FragmentKind::Literal, text);
		Ok(())
	}

	fn float(&mut self, item: &FloatValue) -> Result<()> {
		if !item.fits() {
			return Err(self.malformed(format!("float bits 0x{:x} exceed 32-bit width", item.bits)));
		}
		let (format, precision) = (self.options.float_format, self.options.float_precision);
		let text = match item.width {
			FloatWidth::F32 => {
				let value = f32::from_bits(item.bits as u32);
				format_float(value, f64::from(value), format, precision)
			}
			FloatWidth::F64 => {
				let value = f64::from_bits(item.bits);
				format_float(value, value, format, precision)
			}
		};
		self.emit(FragmentKind::Literal, text);
		Ok(())
	}

	fn character(&mut self, item: CharValue) -> Result<()> {
		let text = match item {
			CharValue::Byte(byte) => byte.to_string(),
			CharValue::Scalar(code) => {
				let ch = char::from_u32(code).ok_or_else(|| self.malformed(format!("0x{code:x} is not a unicode scalar value")))?;
				format!("{ch:?}")
			}
		};
		self.emit(FragmentKind::Literal, text);
		Ok(())
	}

	fn string(&mut self, item: &StringValue) -> Result<()> {
		let limit = self.options.truncate_string_at;
		let text = match item.terminator {
			Terminator::Nul => {
				let window = &item.bytes[..item.bytes.len().min(limit)];
				let Some(end) = window.iter().position(|byte| *byte == 0) else {
					return Err(InspectError::UnterminatedString {
						path: self.path.to_string(),
						max_len: window.len(),
					});
				};
				format!("{:?}", String::from_utf8_lossy(&window[..end]))
			}
			Terminator::Length => quote_truncated(&item.bytes, limit),
		};
		self.emit(FragmentKind::Literal, text);
		Ok(())
	}

	fn array(&mut self, item: &'a ArrayValue, depth: u32) -> Result<()> {
		if let Some(first) = item.items.first() {
			let expected = first.type_label();
			for (index, element) in item.items.iter().enumerate().skip(1) {
				let got = element.type_label();
				if got != expected {
					let path = self.path.join(PathStep::Index(index));
					return Err(InspectError::Malformed {
						path: path.to_string(),
						reason: format!("array element type {got} differs from {expected}"),
					});
				}
			}
		}

		if item.items.is_empty() {
			self.emit(FragmentKind::Punct, "[]");
			return Ok(());
		}

		let shown = self.options.max_array_items.map_or(item.items.len(), |max| max.min(item.items.len()));
		self.open("[", false);
		for (index, element) in item.items.iter().take(shown).enumerate() {
			self.before_item(index);
			self.path.push(PathStep::Index(index));
			let result = self.value(element, depth + 1);
			self.path.pop();
			result?;
			self.after_item();
		}
		if shown < item.items.len() {
			self.before_item(shown);
			self.marker(Marker::Elided, format!("... {} more", item.items.len() - shown));
		}
		self.close("]", false);
		Ok(())
	}

	fn structure(&mut self, item: &'a StructValue, depth: u32) -> Result<()> {
		self.emit(FragmentKind::Name, &*item.type_name);
		self.emit(FragmentKind::Space, " ");
		if item.fields.is_empty() {
			self.emit(FragmentKind::Punct, "{}");
			return Ok(());
		}

		self.open("{", true);
		for (index, field) in item.fields.iter().enumerate() {
			self.before_item(index);
			self.emit(FragmentKind::Name, &*field.name);
			self.emit(FragmentKind::Punct, ": ");
			self.path.push(PathStep::Field(field.name.clone()));
			let result = self.value(&field.value, depth + 1);
			self.path.pop();
			result?;
			self.after_item();
		}
		self.close("}", true);
		Ok(())
	}

	fn enumeration(&mut self, item: &EnumValue) {
		match item.variant_name() {
			Some(name) => self.emit(FragmentKind::Name, name),
			None => {
				debug!(path = %self.path, type_name = %item.type_name, raw = item.raw, "unknown enum variant");
				self.marker(Marker::UnknownVariant, format!("<unknown-variant:#{}>", item.raw));
			}
		}
	}

	fn pointer(&mut self, item: &'a PointerValue, depth: u32) -> Result<()> {
		let Some(address) = &item.target else {
			self.marker(Marker::Null, "<null>".to_owned());
			return Ok(());
		};

		if self.visited.contains(address) {
			debug!(path = %self.path, %address, "pointer cycle truncated");
			self.marker(Marker::Cycle, format!("<cycle -> #{address}>"));
			return Ok(());
		}

		let Some(target) = self.snapshot.get(address) else {
			debug!(path = %self.path, %address, "dangling pointer");
			self.marker(Marker::Dangling, format!("<dangling -> #{address}>"));
			return Ok(());
		};

		trace!(%address, depth, target_type = %item.target_type, "expanding pointer target");
		if self.options.annotate_pointers {
			self.emit(FragmentKind::Name, format!("#{address}"));
			self.emit(FragmentKind::Punct, " -> ");
		}

		self.visited.insert(address);
		self.path.push(PathStep::Deref(address.clone()));
		let result = self.value(target, depth + 1);
		self.path.pop();
		self.visited.remove(address);
		result
	}

	fn open(&mut self, token: &'static str, padded: bool) {
		self.emit(FragmentKind::Punct, token);
		match self.options.layout {
			Layout::Compact if padded => self.emit(FragmentKind::Space, " "),
			Layout::Compact => {}
			Layout::Pretty => self.indent += 1,
		}
	}

	fn before_item(&mut self, index: usize) {
		match self.options.layout {
			Layout::Compact if index > 0 => self.emit(FragmentKind::Punct, ", "),
			Layout::Compact => {}
			Layout::Pretty => self.newline(),
		}
	}

	fn after_item(&mut self) {
		if self.options.layout == Layout::Pretty {
			self.emit(FragmentKind::Punct, ",");
		}
	}

	fn close(&mut self, token: &'static str, padded: bool) {
		match self.options.layout {
			Layout::Compact if padded => self.emit(FragmentKind::Space, " "),
			Layout::Compact => {}
			Layout::Pretty => {
				self.indent -= 1;
				self.newline();
			}
		}
		self.emit(FragmentKind::Punct, token);
	}

	fn newline(&mut self) {
		let text = format!("\n{}", "  ".repeat(self.indent));
		self.emit(FragmentKind::Space, text);
	}

	fn marker(&mut self, marker: Marker, text: String) {
		self.emit(FragmentKind::Marker(marker), text);
	}

	fn emit(&mut self, kind: FragmentKind, text: impl Into<Box<str>>) {
		self.out.push(Fragment { kind, text: text.into() });
	}

	fn malformed(&self, reason: String) -> InspectError {
		InspectError::Malformed {
			path: self.path.to_string(),
			reason,
		}
	}
}

fn format_float<T: fmt::Display + fmt::LowerExp>(value: T, wide: f64, format: FloatFormat, precision: Option<usize>) -> String {
	if wide.is_nan() {
		return "NaN".to_owned();
	}
	if wide.is_infinite() {
		return if wide > 0.0 { "inf" } else { "-inf" }.to_owned();
	}
	match (format, precision) {
		(FloatFormat::Fixed, None) => format!("{value}"),
		(FloatFormat::Fixed, Some(digits)) => format!("{value:.digits$}"),
		(FloatFormat::Scientific, None) => format!("{value:e}"),
		(FloatFormat::Scientific, Some(digits)) => format!("{value:.digits$e}"),
	}
}

fn quote_truncated(bytes: &[u8], max_len: usize) -> String {
	// Scalars are at most 4 bytes, so the window holds `max_len + 1` chars whenever the buffer does.
	let window = &bytes[..bytes.len().min(max_len.saturating_add(1).saturating_mul(4))];
	let text = String::from_utf8_lossy(window);
	let Some((end, _)) = text.char_indices().nth(max_len) else {
		return format!("{text:?}");
	};
	let quoted = format!("{:?}", &text[..end]);
	format!("{}...\"", &quoted[..quoted.len() - 1])
}
