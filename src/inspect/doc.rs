use std::path::Path;

use serde::Deserialize;

use crate::inspect::{
	Address, FieldValue, FloatWidth, InspectError, IntWidth, NodePath, Ownership, PathStep, Result, Snapshot, StringValue, StructValue, Terminator,
	Value, enum_variants,
};

/// Serialized snapshot handed over by a debugger front end.
///
/// ```json
/// { "root": "circular_a",
///   "nodes": [ { "address": "circular_a", "value": { "kind": "struct", "name": "CircularPointer", "fields": [] } } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
	/// Address of the node to render.
	#[serde(default)]
	pub root: Option<String>,
	/// Inline value to render instead of a node.
	#[serde(default)]
	pub value: Option<ValueDoc>,
	/// Addressable nodes in snapshot order.
	#[serde(default)]
	pub nodes: Vec<NodeDoc>,
}

/// One addressable node.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDoc {
	/// `0x`-prefixed hex or a symbolic label.
	pub address: String,
	/// Node value.
	pub value: ValueDoc,
}

/// One struct field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDoc {
	/// Field name.
	pub name: String,
	/// Field value.
	pub value: ValueDoc,
}

/// One known enum variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDoc {
	/// Variant name.
	pub name: String,
	/// Underlying integer.
	pub value: i64,
}

/// String terminator policy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminatorDoc {
	/// NUL-terminated.
	Nul,
	/// Length-delimited.
	#[default]
	Length,
}

/// Integer literal; 128-bit values are passed as decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntLiteral {
	/// Fits in `i64`.
	Signed(i64),
	/// Fits in `u64`.
	Unsigned(u64),
	/// Decimal text.
	Text(String),
}

/// Serialized value, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ValueDoc {
	/// Fixed-width integer.
	Int {
		/// Width in bits.
		width: u32,
		/// Signedness; defaults to signed.
		#[serde(default = "default_signed")]
		signed: bool,
		/// Numeric value.
		value: IntLiteral,
	},
	/// Fixed-width float.
	Float {
		/// Width in bits.
		width: u32,
		/// Numeric value.
		value: f64,
	},
	/// C `char` byte.
	Char {
		/// Byte value.
		value: u8,
	},
	/// Unicode scalar.
	Rune {
		/// Character.
		value: char,
	},
	/// Boolean.
	Bool {
		/// Value.
		value: bool,
	},
	/// String from text or raw bytes.
	String {
		/// Text content; a NUL is appended for `nul` strings.
		#[serde(default)]
		value: Option<String>,
		/// Raw bytes, used verbatim.
		#[serde(default)]
		bytes: Option<Vec<u8>>,
		/// Heap-owned storage.
		#[serde(default)]
		owned: bool,
		/// Terminator policy.
		#[serde(default)]
		terminator: TerminatorDoc,
	},
	/// Array.
	Array {
		/// Element type name.
		element_type: String,
		/// Elements.
		#[serde(default)]
		items: Vec<ValueDoc>,
	},
	/// Struct.
	Struct {
		/// Type name.
		name: String,
		/// Fields in declaration order.
		#[serde(default)]
		fields: Vec<FieldDoc>,
	},
	/// Enum.
	Enum {
		/// Type name.
		name: String,
		/// Known variants.
		variants: Vec<VariantDoc>,
		/// Underlying integer.
		value: i64,
	},
	/// Pointer; a missing target is null.
	Pointer {
		/// Pointee type name.
		target_type: String,
		/// Target address.
		#[serde(default)]
		target: Option<String>,
	},
}

fn default_signed() -> bool {
	true
}

/// Document converted into the value model.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
	/// All addressable nodes.
	pub snapshot: Snapshot,
	/// Root node address, when the document names one.
	pub root: Option<Address>,
	/// Inline root value, when the document carries one.
	pub value: Option<Value>,
}

impl Document {
	/// Parse a JSON document.
	pub fn from_json(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Read and parse a JSON document from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Ok(serde_json::from_slice(&bytes)?)
	}

	/// Convert into a snapshot plus root selection.
	pub fn load(self) -> Result<LoadedDocument> {
		let mut snapshot = Snapshot::new();
		for node in self.nodes {
			let address = Address::parse(&node.address);
			let path = NodePath::root().join(PathStep::Deref(address.clone()));
			let value = convert(node.value, &path)?;
			if snapshot.insert(address.clone(), value).is_some() {
				return Err(InspectError::DuplicateAddress {
					address: address.to_string(),
				});
			}
		}

		let root = self.root.as_deref().map(Address::parse);
		if let Some(address) = &root
			&& !snapshot.contains(address)
		{
			return Err(InspectError::UnknownAddress {
				address: address.to_string(),
			});
		}

		let value = self.value.map(|item| convert(item, &NodePath::root())).transpose()?;
		Ok(LoadedDocument { snapshot, root, value })
	}
}

fn convert(doc: ValueDoc, path: &NodePath) -> Result<Value> {
	match doc {
		ValueDoc::Int { width, signed, value } => convert_int(width, signed, value, path),
		ValueDoc::Float { width, value } => match FloatWidth::from_bits(width) {
			Some(FloatWidth::F32) => {
				let narrow = value as f32;
				if value.is_finite() && narrow.is_infinite() {
					return Err(invalid(path, format!("{value} out of range for f32")));
				}
				Ok(Value::f32(narrow))
			}
			Some(FloatWidth::F64) => Ok(Value::f64(value)),
			None => Err(invalid(path, format!("float width {width} is not 32 or 64"))),
		},
		ValueDoc::Char { value } => Ok(Value::byte_char(value)),
		ValueDoc::Rune { value } => Ok(Value::scalar_char(value)),
		ValueDoc::Bool { value } => Ok(Value::Bool(value)),
		ValueDoc::String {
			value,
			bytes,
			owned,
			terminator,
		} => {
			let ownership = if owned { Ownership::Owned } else { Ownership::Borrowed };
			let terminator = match terminator {
				TerminatorDoc::Nul => Terminator::Nul,
				TerminatorDoc::Length => Terminator::Length,
			};
			let bytes = match (bytes, value) {
				(Some(_), Some(_)) => return Err(invalid(path, "string takes `value` or `bytes`, not both".to_owned())),
				(Some(bytes), None) => bytes,
				(None, Some(text)) => {
					let mut bytes = text.into_bytes();
					if terminator == Terminator::Nul {
						bytes.push(0);
					}
					bytes
				}
				(None, None) => return Err(invalid(path, "string needs `value` or `bytes`".to_owned())),
			};
			Ok(Value::String(StringValue {
				ownership,
				terminator,
				bytes: bytes.into_boxed_slice(),
			}))
		}
		ValueDoc::Array { element_type, items } => {
			let items = items
				.into_iter()
				.enumerate()
				.map(|(index, item)| convert(item, &path.join(PathStep::Index(index))))
				.collect::<Result<Vec<_>>>()?;
			Ok(Value::array(&element_type, items))
		}
		ValueDoc::Struct { name, fields } => {
			let fields = fields
				.into_iter()
				.map(|field| -> Result<FieldValue> {
					let value = convert(field.value, &path.join(PathStep::Field(field.name.as_str().into())))?;
					Ok(FieldValue {
						name: field.name.into_boxed_str(),
						value,
					})
				})
				.collect::<Result<Vec<_>>>()?;
			Ok(Value::Struct(StructValue {
				type_name: name.into_boxed_str(),
				fields,
			}))
		}
		ValueDoc::Enum { name, variants, value } => {
			let variants = enum_variants(variants.iter().map(|item| (item.name.as_str(), item.value)));
			Ok(Value::enumeration(&name, variants, value))
		}
		ValueDoc::Pointer { target_type, target } => Ok(match target {
			Some(target) => Value::pointer(&target_type, Address::parse(&target)),
			None => Value::null_pointer(&target_type),
		}),
	}
}

fn convert_int(width: u32, signed: bool, literal: IntLiteral, path: &NodePath) -> Result<Value> {
	let width = IntWidth::from_bits(width).ok_or_else(|| invalid(path, format!("integer width {width} is not 8, 16, 32, 64, or 128")))?;
	let bits = width.bits();

	if signed {
		let value = match literal {
			IntLiteral::Signed(value) => i128::from(value),
			IntLiteral::Unsigned(value) => i128::from(value),
			IntLiteral::Text(text) => text.parse::<i128>().map_err(|_| invalid(path, format!("`{text}` is not a signed integer")))?,
		};
		if bits < 128 {
			let half = 1_i128 << (bits - 1);
			if value < -half || value >= half {
				return Err(invalid(path, format!("{value} out of range for i{bits}")));
			}
		}
		return Ok(Value::signed(width, value));
	}

	let value = match literal {
		IntLiteral::Signed(value) => u128::try_from(value).map_err(|_| invalid(path, format!("{value} out of range for u{bits}")))?,
		IntLiteral::Unsigned(value) => u128::from(value),
		IntLiteral::Text(text) => text.parse::<u128>().map_err(|_| invalid(path, format!("`{text}` is not an unsigned integer")))?,
	};
	if bits < 128 && value >> bits != 0 {
		return Err(invalid(path, format!("{value} out of range for u{bits}")));
	}
	Ok(Value::unsigned(width, value))
}

fn invalid(path: &NodePath, reason: String) -> InspectError {
	InspectError::InvalidDocument {
		path: path.to_string(),
		reason,
	}
}

#[cfg(test)]
mod tests;
