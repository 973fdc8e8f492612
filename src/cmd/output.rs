use valprint::inspect::{FloatFormat, Fragment, InspectOptions, Layout, MAX_DEPTH_LIMIT, Rendering, Result};

/// Rendering flags shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InspectArgs {
	#[arg(long = "max-depth", value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DEPTH_LIMIT)))]
	pub max_depth: Option<u32>,
	#[arg(long = "float-format", value_enum)]
	pub float_format: Option<FloatFormatArg>,
	#[arg(long = "float-precision")]
	pub float_precision: Option<usize>,
	#[arg(long = "truncate-strings-at")]
	pub truncate_string_at: Option<usize>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
	#[arg(long = "annotate-ptrs")]
	pub annotate_ptrs: bool,
	#[arg(long)]
	pub pretty: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum FloatFormatArg {
	Fixed,
	Scientific,
}

impl InspectArgs {
	/// Apply flags on top of the default options.
	pub fn options(&self) -> InspectOptions {
		let mut options = InspectOptions::default();
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		if let Some(format) = self.float_format {
			options.float_format = match format {
				FloatFormatArg::Fixed => FloatFormat::Fixed,
				FloatFormatArg::Scientific => FloatFormat::Scientific,
			};
		}
		options.float_precision = self.float_precision;
		if let Some(limit) = self.truncate_string_at {
			options.truncate_string_at = limit;
		}
		options.max_array_items = self.max_array;
		options.annotate_pointers = self.annotate_ptrs;
		if self.pretty {
			options.layout = Layout::Pretty;
		}
		options
	}
}

/// One rendered root with its display label.
pub struct Rendered {
	pub label: String,
	pub rendering: Rendering,
}

/// Print renderings as text lines or a JSON array.
pub fn print_rendered(items: &[Rendered], json: bool) -> Result<()> {
	if json {
		println!("{}", rendered_json(items)?);
	} else {
		print!("{}", rendered_text(items));
	}
	Ok(())
}

pub(crate) fn rendered_text(items: &[Rendered]) -> String {
	let mut out = String::new();
	for item in items {
		out.push_str(&format!("{} = {}\n", item.label, item.rendering));
	}
	out
}

pub(crate) fn rendered_json(items: &[Rendered]) -> Result<String> {
	let rows: Vec<JsonRendered<'_>> = items
		.iter()
		.map(|item| JsonRendered {
			root: &item.label,
			rendering: item.rendering.to_string(),
			fragments: item.rendering.fragments(),
		})
		.collect();
	Ok(serde_json::to_string_pretty(&rows)?)
}

#[derive(serde::Serialize)]
struct JsonRendered<'a> {
	root: &'a str,
	rendering: String,
	fragments: &'a [Fragment],
}

#[cfg(test)]
mod tests;
