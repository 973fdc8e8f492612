//! Variables of the debugger fixture programs, captured as snapshots.
//!
//! Each fixture mirrors the locals of one `print` program at its breakpoint,
//! with heap allocations placed at raw addresses.

use crate::inspect::{Address, InspectError, Inspector, IntWidth, Ownership, Rendering, Result, Snapshot, Value, enum_variants};

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 5] = ["cprint", "cppclass", "rustprint", "goprint", "circular"];

/// One fixture program's frame.
#[derive(Debug, Clone)]
pub struct Fixture {
	/// Fixture name.
	pub name: &'static str,
	/// Locals and heap nodes.
	pub snapshot: Snapshot,
	/// Locals in declaration order.
	pub roots: Vec<Address>,
}

impl Fixture {
	fn new(name: &'static str) -> Self {
		Self {
			name,
			snapshot: Snapshot::new(),
			roots: Vec::new(),
		}
	}

	fn local(&mut self, name: &str, value: Value) {
		let address = Address::label(name);
		self.snapshot.insert(address.clone(), value);
		self.roots.push(address);
	}

	fn heap(&mut self, addr: u64, value: Value) -> Address {
		let address = Address::raw(addr);
		self.snapshot.insert(address.clone(), value);
		address
	}

	/// Render every local in declaration order.
	pub fn render_all(&self, inspector: &Inspector) -> Result<Vec<(Address, Rendering)>> {
		self.roots
			.iter()
			.map(|root| -> Result<(Address, Rendering)> { Ok((root.clone(), inspector.render_at(&self.snapshot, root)?)) })
			.collect()
	}
}

/// Look up a fixture by name.
pub fn by_name(name: &str) -> Result<Fixture> {
	match name {
		"cprint" => Ok(cprint()),
		"cppclass" => Ok(cppclass()),
		"rustprint" => Ok(rustprint()),
		"goprint" => Ok(goprint()),
		"circular" => Ok(circular()),
		_ => Err(InspectError::UnknownFixture { name: name.to_owned() }),
	}
}

/// Frame of the C print program.
pub fn cprint() -> Fixture {
	let mut fx = Fixture::new("cprint");

	fx.local("a", Value::byte_char(1));
	fx.local("b", Value::signed(IntWidth::W16, 2));
	fx.local("c", Value::signed(IntWidth::W32, 3));
	fx.local("d", Value::signed(IntWidth::W64, 4));
	fx.local("e", Value::signed(IntWidth::W64, 5));
	fx.local("f", Value::unsigned(IntWidth::W8, 6));
	fx.local("g", Value::unsigned(IntWidth::W16, 7));
	fx.local("h", Value::unsigned(IntWidth::W32, 8));
	fx.local("i", Value::unsigned(IntWidth::W64, 9));
	fx.local("j", Value::unsigned(IntWidth::W64, 10));
	fx.local("j_ptr", Value::pointer("unsigned long long", Address::label("j")));
	fx.local("k", Value::f32(11.5));
	fx.local("l", Value::f64(12.75));
	fx.local("ts", test_struct(13, 14));

	let ts2 = fx.heap(0x5555_5555_92a0, test_struct(15, 16));
	fx.local("ts2", Value::pointer("TestStruct", ts2));

	let mut arr = vec![Value::f32(0.0); 14];
	arr[0] = Value::f32(1.23);
	arr[1] = Value::f32(4.56);
	arr[13] = Value::f32(7.89);
	fx.local("arr", Value::array("float", arr));

	let basic = fx.heap(0x5555_5555_6004, Value::c_string(Ownership::Borrowed, "Hello, world!"));
	fx.local("basic_str", Value::pointer("char", basic));
	let heap = fx.heap(0x5555_5555_92c0, Value::c_string(Ownership::Owned, "yes"));
	fx.local("heap_str", Value::pointer("char", heap));

	fx.local("circular_a", circular_node(17, "circular_b"));
	fx.local("circular_b", circular_node(18, "circular_a"));

	let variants = enum_variants([("ONE", 0), ("TWO", 1), ("THREE", 2)]);
	fx.local("enum_one", Value::enumeration("TestEnum", variants.clone(), 0));
	fx.local("enum_two", Value::enumeration("TestEnum", variants.clone(), 1));
	fx.local("enum_three", Value::enumeration("TestEnum", variants, 2));

	fx
}

fn test_struct(a: u8, b: i128) -> Value {
	Value::structure("TestStruct", [("A", Value::byte_char(a)), ("B", Value::signed(IntWidth::W32, b))])
}

/// Frame of the C++ class program at the `fr.print()` call.
pub fn cppclass() -> Fixture {
	let mut fx = Fixture::new("cppclass");

	fx.local("stack", my_class(1));
	let heap = fx.heap(0x5555_5556_aeb0, my_class(2));
	fx.local("heap", Value::pointer("MyNamespace::MyClass", heap.clone()));
	fx.local("fr", Value::structure("MyNamespace::FriendClass", [("c", Value::pointer("MyNamespace::MyClass", heap))]));

	fx
}

fn my_class(public_field: i128) -> Value {
	Value::structure(
		"MyNamespace::MyClass",
		[
			("public_field", Value::signed(IntWidth::W32, public_field)),
			("protected_field", Value::text(Ownership::Owned, "")),
			("private_field", Value::signed(IntWidth::W32, public_field + 1000)),
			("private_lambda", Value::structure("std::function<int (int, int)>", Vec::<(&str, Value)>::new())),
		],
	)
}

/// Frame of the Rust print program.
#[allow(clippy::approx_constant)]
pub fn rustprint() -> Fixture {
	let mut fx = Fixture::new("rustprint");

	fx.local("boolean", Value::Bool(true));
	fx.local("character", Value::scalar_char('A'));
	fx.local("integer", Value::signed(IntWidth::W32, 42));
	fx.local("unsigned_integer", Value::unsigned(IntWidth::W32, 42));
	fx.local("floating_point", Value::f64(3.14));
	fx.local("byte", Value::unsigned(IntWidth::W8, 255));
	fx.local("short", Value::signed(IntWidth::W16, -32000));
	fx.local("long", Value::signed(IntWidth::W64, 1234567890));
	fx.local("long_long", Value::signed(IntWidth::W128, 1234567890123456789));
	fx.local("unsigned_long_long", Value::unsigned(IntWidth::W128, 12345678901234567890));
	fx.local("float", Value::f32(2.71));
	fx.local(
		"tuple",
		Value::structure(
			"(i32, f64, char)",
			[
				("0", Value::signed(IntWidth::W32, 10)),
				("1", Value::f64(6.28)),
				("2", Value::scalar_char('R')),
			],
		),
	);
	fx.local("string_literal", Value::text(Ownership::Borrowed, "Hello, world!"));
	fx.local("string_object", Value::text(Ownership::Owned, "Rust is fun!"));

	fx
}

/// Frame of the Go print program.
pub fn goprint() -> Fixture {
	let mut fx = Fixture::new("goprint");

	fx.local("a", Value::unsigned(IntWidth::W8, 1));
	fx.local("b", Value::unsigned(IntWidth::W16, 2));
	fx.local("c", Value::unsigned(IntWidth::W32, 3));
	fx.local("d", Value::unsigned(IntWidth::W64, 4));
	fx.local("e", Value::signed(IntWidth::W8, 5));
	fx.local("f", Value::signed(IntWidth::W16, 6));
	fx.local("g", Value::signed(IntWidth::W32, 7));
	fx.local("h", Value::signed(IntWidth::W64, 8));
	fx.local("i", Value::f32(8.0));
	fx.local("j", Value::f64(8.0));
	fx.local("k", Value::signed(IntWidth::W64, 9));
	fx.local("l", Value::Bool(true));
	fx.local("m", Value::Bool(false));
	fx.local("n", Value::text(Ownership::Borrowed, "hello!"));
	fx.local("o", Value::array("int", (1..=3).map(|idx| Value::signed(IntWidth::W64, idx)).collect()));
	fx.local(
		"p",
		Value::array(
			"string",
			["hi", "hey", "hello there"]
				.into_iter()
				.map(|item| Value::text(Ownership::Borrowed, item))
				.collect(),
		),
	);

	let chan = fx.heap(
		0xc000_0a4000,
		Value::structure(
			"hchan<string>",
			[
				("qcount", Value::unsigned(IntWidth::W64, 1)),
				("dataqsiz", Value::unsigned(IntWidth::W64, 10)),
				("closed", Value::unsigned(IntWidth::W32, 0)),
			],
		),
	);
	fx.local("q", Value::pointer("hchan<string>", chan));

	fx.local(
		"r",
		Value::structure(
			"main.BasicStruct",
			[
				("A", Value::signed(IntWidth::W64, 123)),
				("b", Value::text(Ownership::Borrowed, "basic struct")),
				(
					"c",
					Value::structure(
						"main.NestedStruct",
						[("D", Value::signed(IntWidth::W64, 456)), ("E", Value::signed(IntWidth::W64, 789))],
					),
				),
			],
		),
	);

	fx
}

/// Two heap nodes pointing at each other.
pub fn circular() -> Fixture {
	let mut fx = Fixture::new("circular");

	fx.local("circular_a", circular_node(17, "circular_b"));
	fx.local("circular_b", circular_node(18, "circular_a"));

	fx
}

fn circular_node(value: i128, next: &str) -> Value {
	Value::structure(
		"CircularPointer",
		[
			("value", Value::signed(IntWidth::W32, value)),
			("ptr", Value::pointer("CircularPointer", Address::label(next))),
		],
	)
}
