use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::xdr::decode::{DecodeOptions, decode_value};
use crate::xdr::display::DisplayValue;
use crate::xdr::leaf::{FormatRules, leaf_display};
use crate::xdr::scval::sc_val_display;
use crate::xdr::value::Value;
use crate::xdr::{Result, XdrError};

/// One node of a display tree.
///
/// The root is labeled with the requested type name; below that, labels are
/// field accessor names, `[index]` for array elements, and `[variant]`
/// markers sit in the `value` slot of union nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
	/// Node label.
	#[serde(rename = "type")]
	pub label: String,
	/// Display value. Structs and absent optionals carry none.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<DisplayValue>,
	/// Child nodes. Leaves and void union arms carry none.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub nodes: Option<Vec<TreeNode>>,
}

/// Decode a base64 XDR payload as `type_name` and build its display tree.
pub fn build_tree(input: &str, type_name: &str, rules: &FormatRules) -> Result<TreeNode> {
	build_tree_with(input, type_name, rules, &DecodeOptions::default())
}

/// [`build_tree`] with explicit decode limits.
pub fn build_tree_with(
	input: &str,
	type_name: &str,
	rules: &FormatRules,
	options: &DecodeOptions,
) -> Result<TreeNode> {
	decode_input(input, type_name, options)
		.and_then(|value| build_node(&value, type_name, rules))
		.map_err(|source| XdrError::Decode { type_name: type_name.to_owned(), source: Box::new(source) })
}

fn decode_input(input: &str, type_name: &str, options: &DecodeOptions) -> Result<Value> {
	let bytes = STANDARD.decode(input.trim())?;
	decode_value(&bytes, type_name, options)
}

fn build_node(value: &Value, label: &str, rules: &FormatRules) -> Result<TreeNode> {
	match value {
		Value::Array(elems) => {
			let mut nodes = Vec::with_capacity(elems.len());
			for (index, elem) in elems.iter().enumerate() {
				nodes.push(build_node(elem, &format!("[{index}]"), rules)?);
			}
			Ok(TreeNode {
				label: label.to_owned(),
				value: Some(DisplayValue::Text(format!("Array[{}]", elems.len()))),
				nodes: Some(nodes),
			})
		}
		Value::Struct(inner) => {
			let mut nodes = Vec::with_capacity(inner.fields.len());
			for field in &inner.fields {
				nodes.push(build_node(&field.value, &field.name, rules)?);
			}
			Ok(TreeNode { label: label.to_owned(), value: None, nodes: Some(nodes) })
		}
		Value::Union(union) => {
			let nodes = match union.arm.as_ref() {
				Some(arm) => {
					// contract values may collapse the whole arm into one display
					let child = match sc_val_display(union) {
						Some(display) => {
							TreeNode { label: arm.name.to_string(), value: Some(display), nodes: None }
						}
						None => build_node(&arm.value, &arm.name, rules)?,
					};
					Some(vec![child])
				}
				None => None,
			};
			Ok(TreeNode {
				label: label.to_owned(),
				value: Some(DisplayValue::Text(format!("[{}]", union.variant))),
				nodes,
			})
		}
		leaf => Ok(TreeNode { label: label.to_owned(), value: leaf_display(leaf, label, rules)?, nodes: None }),
	}
}

#[cfg(test)]
mod tests;
