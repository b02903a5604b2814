use super::{build_node, build_tree};
use crate::xdr::display::DisplayValue;
use crate::xdr::leaf::FormatRules;
use crate::xdr::value::{FieldValue, StructValue, UnionValue, Value};
use crate::xdr::XdrError;

fn node(value: &Value, label: &str) -> super::TreeNode {
	build_node(value, label, &FormatRules::default()).expect("node builds")
}

mod node_shapes {
	use super::*;

	#[test]
	fn structs_carry_children_and_no_value() {
		let value = Value::Struct(StructValue {
			type_name: "Price".into(),
			fields: vec![
				FieldValue { name: "n".into(), value: Value::Int(1) },
				FieldValue { name: "d".into(), value: Value::Int(2) },
			],
		});
		let node = node(&value, "price");
		assert_eq!(node.label, "price");
		assert_eq!(node.value, None);
		let children = node.nodes.expect("struct children");
		assert_eq!(children.len(), 2);
		assert_eq!(children[0].label, "n");
		assert_eq!(children[0].value, Some(DisplayValue::Text("1".into())));
		assert_eq!(children[0].nodes, None);
	}

	#[test]
	fn arrays_carry_length_marker_and_indexed_children() {
		let value = Value::Array(vec![Value::Uint(10), Value::Uint(20)]);
		let node = node(&value, "operations");
		assert_eq!(node.value, Some(DisplayValue::Text("Array[2]".into())));
		let children = node.nodes.expect("array children");
		assert_eq!(children[0].label, "[0]");
		assert_eq!(children[1].label, "[1]");
	}

	#[test]
	fn unions_carry_variant_marker_and_one_arm_child() {
		let value = Value::Union(Box::new(UnionValue {
			type_name: "Memo".into(),
			variant: "memoText".into(),
			discriminant: 1,
			arm: Some(FieldValue { name: "text".into(), value: Value::String("hi".into()) }),
		}));
		let node = node(&value, "memo");
		assert_eq!(node.value, Some(DisplayValue::Text("[memoText]".into())));
		let children = node.nodes.expect("arm child");
		assert_eq!(children.len(), 1);
		assert_eq!(children[0].label, "text");
		assert_eq!(children[0].value, Some(DisplayValue::Text("hi".into())));
	}

	#[test]
	fn void_arms_have_no_children() {
		let value = Value::Union(Box::new(UnionValue {
			type_name: "Memo".into(),
			variant: "memoNone".into(),
			discriminant: 0,
			arm: None,
		}));
		let node = node(&value, "memo");
		assert_eq!(node.value, Some(DisplayValue::Text("[memoNone]".into())));
		assert_eq!(node.nodes, None);
	}

	#[test]
	fn contract_values_collapse_into_the_arm_child() {
		let value = Value::Union(Box::new(UnionValue {
			type_name: "ScVal".into(),
			variant: "scvI64".into(),
			discriminant: 6,
			arm: Some(FieldValue { name: "i64".into(), value: Value::Hyper(-5) }),
		}));
		let node = node(&value, "ScVal");
		assert_eq!(node.value, Some(DisplayValue::Text("[scvI64]".into())));
		let children = node.nodes.expect("arm child");
		assert_eq!(children[0].label, "i64");
		assert_eq!(children[0].value, Some(DisplayValue::Text("-5".into())));
		assert_eq!(children[0].nodes, None);
	}

	#[test]
	fn absent_optional_arms_yield_bare_nodes() {
		let value = Value::Union(Box::new(UnionValue {
			type_name: "ScVal".into(),
			variant: "scvVec".into(),
			discriminant: 16,
			arm: Some(FieldValue { name: "vec".into(), value: Value::Void }),
		}));
		let node = node(&value, "ScVal");
		let children = node.nodes.expect("arm child");
		assert_eq!(children[0].label, "vec");
		assert_eq!(children[0].value, None);
		assert_eq!(children[0].nodes, None);
	}

	#[test]
	fn int_switched_unions_use_decimal_markers() {
		let value = Value::Union(Box::new(UnionValue {
			type_name: "TransactionExt".into(),
			variant: "0".into(),
			discriminant: 0,
			arm: None,
		}));
		assert_eq!(node(&value, "ext").value, Some(DisplayValue::Text("[0]".into())));
	}
}

mod input_wrapping {
	use super::*;

	#[test]
	fn bad_base64_reports_the_requested_type() {
		match build_tree("!!not base64!!", "Transaction", &FormatRules::default()) {
			Err(XdrError::Decode { type_name, source }) => {
				assert_eq!(type_name, "Transaction");
				assert!(matches!(*source, XdrError::Base64(_)));
			}
			other => panic!("expected wrapped decode error, got {other:?}"),
		}
	}

	#[test]
	fn surrounding_whitespace_is_tolerated() {
		// base64 of the four bytes 00 00 00 07
		let tree = build_tree("  AAAABw==\n", "Uint32", &FormatRules::default()).expect("tree builds");
		assert_eq!(tree.label, "Uint32");
		assert_eq!(tree.value, Some(DisplayValue::Text("7".into())));
	}
}
