use valprint::inspect::{Address, Inspector, Result, fixtures};

use crate::cmd::output::{InspectArgs, Rendered, print_rendered};

#[derive(clap::Args)]
pub struct Args {
	/// Fixture name; lists the available fixtures when omitted.
	pub name: Option<String>,
	#[arg(long)]
	pub root: Option<String>,
	#[command(flatten)]
	pub inspect: InspectArgs,
}

/// Render the locals of a built-in fixture frame.
pub fn run(args: Args) -> Result<()> {
	let Args { name, root, inspect } = args;

	let Some(name) = name else {
		for name in fixtures::NAMES {
			println!("{name}");
		}
		return Ok(());
	};

	let fixture = fixtures::by_name(&name)?;
	let inspector = Inspector::new(inspect.options());

	let rendered = match root.as_deref() {
		Some(root) => {
			let address = Address::parse(root);
			let rendering = inspector.render_at(&fixture.snapshot, &address)?;
			vec![Rendered {
				label: address.to_string(),
				rendering,
			}]
		}
		None => fixture
			.render_all(&inspector)?
			.into_iter()
			.map(|(address, rendering)| Rendered {
				label: address.to_string(),
				rendering,
			})
			.collect(),
	};

	print_rendered(&rendered, inspect.json)
}
