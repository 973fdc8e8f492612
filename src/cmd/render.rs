use std::path::PathBuf;

use valprint::inspect::{Address, Document, Inspector, Result};

use crate::cmd::output::{InspectArgs, Rendered, print_rendered};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub root: Option<String>,
	#[command(flatten)]
	pub inspect: InspectArgs,
}

/// Load a snapshot document and render its root, inline value, or every node.
pub fn run(args: Args) -> Result<()> {
	let Args { file, root, inspect } = args;

	let loaded = Document::open(&file)?.load()?;
	let inspector = Inspector::new(inspect.options());
	tracing::debug!(path = %file.display(), nodes = loaded.snapshot.len(), "document loaded");

	let mut rendered = Vec::new();
	if let Some(root) = root.as_deref() {
		let address = Address::parse(root);
		let rendering = inspector.render_at(&loaded.snapshot, &address)?;
		rendered.push(Rendered {
			label: address.to_string(),
			rendering,
		});
	} else if let Some(value) = &loaded.value {
		rendered.push(Rendered {
			label: "value".to_owned(),
			rendering: inspector.render(value, &loaded.snapshot)?,
		});
	} else if let Some(address) = &loaded.root {
		rendered.push(Rendered {
			label: address.to_string(),
			rendering: inspector.render_at(&loaded.snapshot, address)?,
		});
	} else {
		for address in loaded.snapshot.addresses() {
			rendered.push(Rendered {
				label: address.to_string(),
				rendering: inspector.render_at(&loaded.snapshot, address)?,
			});
		}
	}

	print_rendered(&rendered, inspect.json)
}
