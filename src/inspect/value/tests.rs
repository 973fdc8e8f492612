use super::{Address, CharValue, FloatValue, FloatWidth, IntWidth, IntegerValue, Ownership, Terminator, Value, enum_variants};

#[test]
fn signed_integers_sign_extend_from_width() {
	let value = IntegerValue::from_signed(IntWidth::W16, -32000);
	assert_eq!(value.bits, 0x8300);
	assert!(value.fits());
	assert_eq!(value.as_i128(), -32000);

	let byte = IntegerValue::from_signed(IntWidth::W8, -1);
	assert_eq!(byte.bits, 0xff);
	assert_eq!(byte.as_i128(), -1);
}

#[test]
fn integer_bits_above_width_do_not_fit() {
	let value = IntegerValue {
		width: IntWidth::W8,
		signed: false,
		bits: 0x1ff,
	};
	assert!(!value.fits());
	assert!(IntegerValue::from_unsigned(IntWidth::W128, u128::MAX).fits());
}

#[test]
fn float_bits_above_f32_do_not_fit() {
	assert!(FloatValue::from_f32(2.71).fits());
	let wide = FloatValue {
		width: FloatWidth::F32,
		bits: 1 << 40,
	};
	assert!(!wide.fits());
}

#[test]
fn address_parse_distinguishes_raw_and_label() {
	assert_eq!(Address::parse("0x1000"), Address::raw(0x1000));
	assert_eq!(Address::parse("circular_a"), Address::label("circular_a"));
	assert_eq!(Address::parse("0xzz"), Address::label("0xzz"));
	assert_eq!(Address::raw(0x2000).to_string(), "0x0000000000002000");
}

#[test]
fn c_string_appends_terminator() {
	let Value::String(item) = Value::c_string(Ownership::Owned, "yes") else {
		panic!("expected string value");
	};
	assert_eq!(item.terminator, Terminator::Nul);
	assert_eq!(item.bytes.as_ref(), b"yes\0");
}

#[test]
fn enum_variant_lookup_by_raw_value() {
	let variants = enum_variants([("ONE", 0), ("TWO", 1), ("THREE", 2)]);
	let Value::Enum(three) = Value::enumeration("TestEnum", variants.clone(), 2) else {
		panic!("expected enum value");
	};
	assert_eq!(three.variant_name(), Some("THREE"));

	let Value::Enum(garbage) = Value::enumeration("TestEnum", variants, 99) else {
		panic!("expected enum value");
	};
	assert_eq!(garbage.variant_name(), None);
}

#[test]
fn type_labels_distinguish_char_flavors() {
	assert_eq!(Value::Char(CharValue::Byte(65)).type_label(), "char8");
	assert_eq!(Value::scalar_char('A').type_label(), "char32");
	assert_eq!(Value::signed(IntWidth::W32, 1).type_label(), "i32");
	assert_eq!(Value::null_pointer("Node").type_label(), "*Node");
}
