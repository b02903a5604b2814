use xdrview::xdr::{Result, type_names};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub contains: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// List decodable type names from the schema registry.
pub fn run(args: Args) -> Result<()> {
	let Args { contains, json } = args;

	let needle = contains.map(|filter| filter.to_lowercase());
	let names: Vec<&'static str> = type_names()
		.filter(|name| match &needle {
			Some(needle) => name.to_lowercase().contains(needle),
			None => true,
		})
		.collect();

	if json {
		let payload = TypesJson { count: names.len(), types: names };
		emit_json(&payload);
		return Ok(());
	}

	for name in names {
		println!("{name}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TypesJson {
	count: usize,
	types: Vec<&'static str>,
}
