use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Stable identity of a pointed-to node for one inspection pass.
///
/// Used for cycle bookkeeping only, never for ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Address {
	/// Symbolic label chosen by the caller (e.g. a variable name).
	Label(Arc<str>),
	/// Raw numeric address from the inspected process.
	Raw(u64),
}

impl Address {
	/// Build a symbolic address.
	pub fn label(name: impl Into<Arc<str>>) -> Self {
		Self::Label(name.into())
	}

	/// Build a raw numeric address.
	pub fn raw(addr: u64) -> Self {
		Self::Raw(addr)
	}

	/// Parse `0x`-prefixed hex as a raw address, anything else as a label.
	pub fn parse(input: &str) -> Self {
		if let Some(stripped) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X"))
			&& let Ok(addr) = u64::from_str_radix(stripped, 16)
		{
			return Self::Raw(addr);
		}
		Self::Label(Arc::from(input))
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Label(name) => f.write_str(name),
			Self::Raw(addr) => write!(f, "0x{addr:016x}"),
		}
	}
}

impl From<&str> for Address {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

/// Storage width of an integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
	/// 8 bits.
	W8,
	/// 16 bits.
	W16,
	/// 32 bits.
	W32,
	/// 64 bits.
	W64,
	/// 128 bits.
	W128,
}

impl IntWidth {
	/// Width in bits.
	pub fn bits(self) -> u32 {
		match self {
			Self::W8 => 8,
			Self::W16 => 16,
			Self::W32 => 32,
			Self::W64 => 64,
			Self::W128 => 128,
		}
	}

	/// Map a bit count back to a width.
	pub fn from_bits(bits: u32) -> Option<Self> {
		match bits {
			8 => Some(Self::W8),
			16 => Some(Self::W16),
			32 => Some(Self::W32),
			64 => Some(Self::W64),
			128 => Some(Self::W128),
			_ => None,
		}
	}

	fn mask(self) -> u128 {
		match self {
			Self::W128 => u128::MAX,
			other => (1_u128 << other.bits()) - 1,
		}
	}
}

/// Storage width of a floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
	/// IEEE 754 binary32.
	F32,
	/// IEEE 754 binary64.
	F64,
}

impl FloatWidth {
	/// Map a bit count back to a width.
	pub fn from_bits(bits: u32) -> Option<Self> {
		match bits {
			32 => Some(Self::F32),
			64 => Some(Self::F64),
			_ => None,
		}
	}
}

/// Integer stored as a raw two's-complement bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerValue {
	/// Storage width.
	pub width: IntWidth,
	/// Whether the pattern is interpreted as signed.
	pub signed: bool,
	/// Raw bits; must fit inside `width`.
	pub bits: u128,
}

impl IntegerValue {
	/// Encode a signed integer, truncating to `width`.
	pub fn from_signed(width: IntWidth, value: i128) -> Self {
		Self {
			width,
			signed: true,
			bits: (value as u128) & width.mask(),
		}
	}

	/// Encode an unsigned integer, truncating to `width`.
	pub fn from_unsigned(width: IntWidth, value: u128) -> Self {
		Self {
			width,
			signed: false,
			bits: value & width.mask(),
		}
	}

	/// Whether `bits` has nothing set above `width`.
	pub fn fits(&self) -> bool {
		self.bits & !self.width.mask() == 0
	}

	/// Sign-extended value. Only meaningful when `signed`.
	pub fn as_i128(&self) -> i128 {
		let shift = 128 - self.width.bits();
		((self.bits << shift) as i128) >> shift
	}
}

/// Float stored as raw IEEE 754 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatValue {
	/// Storage width.
	pub width: FloatWidth,
	/// Raw bits; `F32` values use the low 32 bits only.
	pub bits: u64,
}

impl FloatValue {
	/// Encode an `f32`.
	pub fn from_f32(value: f32) -> Self {
		Self {
			width: FloatWidth::F32,
			bits: u64::from(value.to_bits()),
		}
	}

	/// Encode an `f64`.
	pub fn from_f64(value: f64) -> Self {
		Self {
			width: FloatWidth::F64,
			bits: value.to_bits(),
		}
	}

	/// Whether `bits` has nothing set above `width`.
	pub fn fits(&self) -> bool {
		match self.width {
			FloatWidth::F32 => self.bits <= u64::from(u32::MAX),
			FloatWidth::F64 => true,
		}
	}
}

/// Character value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharValue {
	/// Single byte C `char`; an integer type, rendered in decimal.
	Byte(u8),
	/// Unicode scalar value, rendered as a quoted literal.
	Scalar(u32),
}

/// Who owns a string's storage in the inspected program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
	/// Borrowed or static storage (`&str`, string literal).
	Borrowed,
	/// Heap storage owned by the value (`String`, `malloc`ed buffer).
	Owned,
}

/// How the logical end of a string is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
	/// Content ends at the first zero byte.
	Nul,
	/// The whole byte buffer is the content.
	Length,
}

/// String value with its raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringValue {
	/// Storage ownership.
	pub ownership: Ownership,
	/// End-of-content policy.
	pub terminator: Terminator,
	/// Raw bytes as read from memory.
	pub bytes: Box<[u8]>,
}

/// Homogeneous ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
	/// Declared element type name.
	pub element_type: Box<str>,
	/// Elements in memory order.
	pub items: Vec<Value>,
}

/// Struct with ordered named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct type name.
	pub type_name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One named struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

/// One known enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
	/// Symbolic name.
	pub name: Box<str>,
	/// Underlying integer.
	pub value: i64,
}

/// Enum value carrying its known variant set.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
	/// Enum type name.
	pub type_name: Box<str>,
	/// Known variants, shared between values of the same type.
	pub variants: Arc<[EnumVariant]>,
	/// Underlying integer read from memory.
	pub raw: i64,
}

impl EnumValue {
	/// Name of the variant matching `raw`, if any.
	pub fn variant_name(&self) -> Option<&str> {
		self.variants.iter().find(|variant| variant.value == self.raw).map(|variant| variant.name.as_ref())
	}
}

/// Pointer to a node in a [`Snapshot`](crate::inspect::Snapshot).
#[derive(Debug, Clone, PartialEq)]
pub struct PointerValue {
	/// Pointee type name.
	pub target_type: Box<str>,
	/// Target identity; `None` for a null pointer.
	pub target: Option<Address>,
}

/// Decoded runtime value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Fixed-width integer.
	Integer(IntegerValue),
	/// Fixed-width float.
	Float(FloatValue),
	/// Character.
	Char(CharValue),
	/// Boolean.
	Bool(bool),
	/// String.
	String(StringValue),
	/// Array.
	Array(ArrayValue),
	/// Struct.
	Struct(StructValue),
	/// Enum.
	Enum(EnumValue),
	/// Pointer.
	Pointer(PointerValue),
}

impl Value {
	/// Signed integer of the given width.
	pub fn signed(width: IntWidth, value: i128) -> Self {
		Self::Integer(IntegerValue::from_signed(width, value))
	}

	/// Unsigned integer of the given width.
	pub fn unsigned(width: IntWidth, value: u128) -> Self {
		Self::Integer(IntegerValue::from_unsigned(width, value))
	}

	/// `f32` value.
	pub fn f32(value: f32) -> Self {
		Self::Float(FloatValue::from_f32(value))
	}

	/// `f64` value.
	pub fn f64(value: f64) -> Self {
		Self::Float(FloatValue::from_f64(value))
	}

	/// C `char` byte.
	pub fn byte_char(value: u8) -> Self {
		Self::Char(CharValue::Byte(value))
	}

	/// Unicode scalar character.
	pub fn scalar_char(value: char) -> Self {
		Self::Char(CharValue::Scalar(u32::from(value)))
	}

	/// NUL-terminated string; a terminator is appended to `text`.
	pub fn c_string(ownership: Ownership, text: &str) -> Self {
		let mut bytes = Vec::with_capacity(text.len() + 1);
		bytes.extend_from_slice(text.as_bytes());
		bytes.push(0);
		Self::String(StringValue {
			ownership,
			terminator: Terminator::Nul,
			bytes: bytes.into_boxed_slice(),
		})
	}

	/// Length-delimited string.
	pub fn text(ownership: Ownership, text: &str) -> Self {
		Self::String(StringValue {
			ownership,
			terminator: Terminator::Length,
			bytes: text.as_bytes().into(),
		})
	}

	/// Array of `element_type`.
	pub fn array(element_type: &str, items: Vec<Value>) -> Self {
		Self::Array(ArrayValue {
			element_type: element_type.into(),
			items,
		})
	}

	/// Struct with fields in the given order.
	pub fn structure<'n>(type_name: &str, fields: impl IntoIterator<Item = (&'n str, Value)>) -> Self {
		Self::Struct(StructValue {
			type_name: type_name.into(),
			fields: fields
				.into_iter()
				.map(|(name, value)| FieldValue { name: name.into(), value })
				.collect(),
		})
	}

	/// Enum value resolved against `variants`.
	pub fn enumeration(type_name: &str, variants: Arc<[EnumVariant]>, raw: i64) -> Self {
		Self::Enum(EnumValue {
			type_name: type_name.into(),
			variants,
			raw,
		})
	}

	/// Non-null pointer to `target`.
	pub fn pointer(target_type: &str, target: Address) -> Self {
		Self::Pointer(PointerValue {
			target_type: target_type.into(),
			target: Some(target),
		})
	}

	/// Null pointer.
	pub fn null_pointer(target_type: &str) -> Self {
		Self::Pointer(PointerValue {
			target_type: target_type.into(),
			target: None,
		})
	}

	/// Logical kind name, used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Integer(_) => "Integer",
			Self::Float(_) => "Float",
			Self::Char(_) => "Char",
			Self::Bool(_) => "Bool",
			Self::String(_) => "String",
			Self::Array(_) => "Array",
			Self::Struct(_) => "Struct",
			Self::Enum(_) => "Enum",
			Self::Pointer(_) => "Pointer",
		}
	}

	/// Type label used to check array homogeneity.
	pub fn type_label(&self) -> Cow<'_, str> {
		match self {
			Self::Integer(item) => Cow::Owned(format!("{}{}", if item.signed { 'i' } else { 'u' }, item.width.bits())),
			Self::Float(item) => Cow::Borrowed(match item.width {
				FloatWidth::F32 => "f32",
				FloatWidth::F64 => "f64",
			}),
			Self::Char(CharValue::Byte(_)) => Cow::Borrowed("char8"),
			Self::Char(CharValue::Scalar(_)) => Cow::Borrowed("char32"),
			Self::Bool(_) => Cow::Borrowed("bool"),
			Self::String(item) => Cow::Borrowed(match item.ownership {
				Ownership::Borrowed => "&str",
				Ownership::Owned => "String",
			}),
			Self::Array(item) => Cow::Owned(format!("[{}]", item.element_type)),
			Self::Struct(item) => Cow::Borrowed(&item.type_name),
			Self::Enum(item) => Cow::Borrowed(&item.type_name),
			Self::Pointer(item) => Cow::Owned(format!("*{}", item.target_type)),
		}
	}
}

/// Build a shared variant table from `(name, value)` pairs.
pub fn enum_variants<'n>(variants: impl IntoIterator<Item = (&'n str, i64)>) -> Arc<[EnumVariant]> {
	variants
		.into_iter()
		.map(|(name, value)| EnumVariant { name: name.into(), value })
		.collect()
}

#[cfg(test)]
mod tests;
