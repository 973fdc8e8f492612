#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "valprint", about = "Cycle-safe rendering of debugger values")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Render a JSON snapshot document.
	Render(cmd::render::Args),
	/// Render a built-in fixture frame.
	Fixture(cmd::fixture::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("valprint=warn")))
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> valprint::inspect::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Render(args) => cmd::render::run(args),
		Commands::Fixture(args) => cmd::fixture::run(args),
	}
}
