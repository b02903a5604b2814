use std::path::PathBuf;

use xdrview::xdr::{DecodeOptions, DisplayValue, FormatRules, Result, TreeNode, build_tree_with};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(required_unless_present = "file", conflicts_with = "file")]
	pub input: Option<String>,
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub file: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-array")]
	pub max_array: Option<usize>,
}

/// Decode a base64 XDR payload and print its display tree.
pub fn run(args: Args) -> Result<()> {
	let Args { input, type_name, file, json, max_depth, max_array } = args;

	let payload = match file {
		Some(path) => std::fs::read_to_string(path)?,
		None => input.unwrap_or_default(),
	};

	let mut options = DecodeOptions::default();
	if let Some(depth) = max_depth {
		options.max_depth = depth;
	}
	if let Some(elems) = max_array {
		options.max_array_elems = elems;
	}

	let root = build_tree_with(&payload, &type_name, &FormatRules::default(), &options)?;

	if json {
		// one-element sequence, the shape tree consumers already parse
		emit_json(&[&root]);
		return Ok(());
	}

	print_node(&root, 0);
	Ok(())
}

fn print_node(node: &TreeNode, indent: usize) {
	let pad = "  ".repeat(indent);
	match &node.value {
		Some(value) => println!("{pad}{}: {}", node.label, render_display(value)),
		None => println!("{pad}{}", node.label),
	}
	for child in node.nodes.iter().flatten() {
		print_node(child, indent + 1);
	}
}

fn render_display(value: &DisplayValue) -> String {
	match value {
		DisplayValue::Text(text) => text.clone(),
		DisplayValue::Bool(value) => value.to_string(),
		DisplayValue::Int(value) => value.to_string(),
		DisplayValue::Bytes(bytes) => format!("bytes[{}]", bytes.len()),
		DisplayValue::Amount { parsed, raw } => format!("{parsed} (raw {raw})"),
		DisplayValue::Code { value, .. } => value.clone(),
		DisplayValue::Map(map) => serde_json::to_string(map).unwrap_or_else(|_| String::from("{}")),
	}
}
