#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "xdrview", about = "Stellar XDR inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Tree(cmd::tree::Args),
	Types(cmd::types::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> xdrview::xdr::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Types(args) => cmd::types::run(args),
	}
}
