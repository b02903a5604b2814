//! Display forms for Soroban contract values.
//!
//! `ScVal` unions get a value-level rendering instead of the generic
//! union traversal: numeric variants collapse their multi-word wire shape
//! into one decimal string, addresses encode to strkey form, and maps
//! flatten into a native JSON object. Variants with no better form return
//! `None` and the tree builder walks them like any other union.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::xdr::display::DisplayValue;
use crate::xdr::value::{FieldValue, StructValue, UnionValue, Value};
use crate::xdr::{num, strkey};

/// Render the active arm of an `ScVal`, if a dedicated form exists.
pub fn sc_val_display(union: &UnionValue) -> Option<DisplayValue> {
	if union.type_name.as_ref() != "ScVal" {
		return None;
	}
	let arm = union.arm.as_ref()?;
	match union.variant.as_ref() {
		"scvBool" => match arm.value {
			Value::Bool(value) => Some(DisplayValue::Bool(value)),
			_ => None,
		},
		"scvError" => error_code(&arm.value).map(DisplayValue::Int),
		"scvU32" => match arm.value {
			Value::Uint(value) => Some(DisplayValue::Text(value.to_string())),
			_ => None,
		},
		"scvI32" => match arm.value {
			Value::Int(value) => Some(DisplayValue::Text(value.to_string())),
			_ => None,
		},
		"scvU64" | "scvTimepoint" | "scvDuration" => match arm.value {
			Value::Uhyper(value) => Some(DisplayValue::Text(value.to_string())),
			_ => None,
		},
		"scvI64" => match arm.value {
			Value::Hyper(value) => Some(DisplayValue::Text(value.to_string())),
			_ => None,
		},
		"scvU128" => u128_parts(&arm.value).map(|value| DisplayValue::Text(value.to_string())),
		"scvI128" => i128_parts(&arm.value).map(|value| DisplayValue::Text(value.to_string())),
		"scvU256" => parts_256(&arm.value).map(|limbs| DisplayValue::Text(num::u256_to_decimal(limbs))),
		"scvI256" => parts_256(&arm.value).map(|limbs| DisplayValue::Text(num::i256_to_decimal(limbs))),
		"scvBytes" => match &arm.value {
			Value::Bytes(bytes) => Some(DisplayValue::Bytes(bytes.clone())),
			_ => None,
		},
		"scvString" | "scvSymbol" => match &arm.value {
			Value::String(text) => Some(DisplayValue::Text(text.to_string())),
			_ => None,
		},
		"scvAddress" => address_text(&arm.value).map(DisplayValue::Text),
		"scvContractInstance" => instance_wasm_hash(&arm.value).map(DisplayValue::Text),
		"scvLedgerKeyNonce" => nonce_text(&arm.value).map(DisplayValue::Text),
		"scvMap" => map_display(&arm.value),
		// scvVec and the void variants fall back to the generic traversal
		_ => None,
	}
}

/// Numeric code of an `ScError`: the literal contract code, or the member
/// value of the shared error-code enum.
fn error_code(value: &Value) -> Option<i64> {
	let Value::Union(error) = value else {
		return None;
	};
	match &error.arm.as_ref()?.value {
		Value::Uint(code) => Some(i64::from(*code)),
		Value::Enum(member) => Some(i64::from(member.value)),
		_ => None,
	}
}

fn struct_value<'a>(value: &'a Value, type_name: &str) -> Option<&'a StructValue> {
	match value {
		Value::Struct(inner) if inner.type_name.as_ref() == type_name => Some(inner),
		_ => None,
	}
}

fn field_value<'a>(fields: &'a [FieldValue], name: &str) -> Option<&'a Value> {
	fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
}

fn u128_parts(value: &Value) -> Option<u128> {
	let parts = struct_value(value, "UInt128Parts")?;
	let Value::Uhyper(hi) = field_value(&parts.fields, "hi")? else {
		return None;
	};
	let Value::Uhyper(lo) = field_value(&parts.fields, "lo")? else {
		return None;
	};
	Some(num::u128_from_parts(*hi, *lo))
}

fn i128_parts(value: &Value) -> Option<i128> {
	let parts = struct_value(value, "Int128Parts")?;
	let Value::Hyper(hi) = field_value(&parts.fields, "hi")? else {
		return None;
	};
	let Value::Uhyper(lo) = field_value(&parts.fields, "lo")? else {
		return None;
	};
	Some(num::i128_from_parts(*hi, *lo))
}

/// Big-endian limbs of a 256-bit parts struct. The top limb of the signed
/// form decodes as hyper, the rest as unsigned hyper.
fn parts_256(value: &Value) -> Option<[u64; 4]> {
	let parts = match value {
		Value::Struct(inner)
			if inner.type_name.as_ref() == "UInt256Parts" || inner.type_name.as_ref() == "Int256Parts" =>
		{
			inner
		}
		_ => return None,
	};
	let mut limbs = [0_u64; 4];
	for (limb, name) in limbs.iter_mut().zip(["hiHi", "hiLo", "loHi", "loLo"]) {
		*limb = match field_value(&parts.fields, name)? {
			Value::Uhyper(word) => *word,
			Value::Hyper(word) => *word as u64,
			_ => return None,
		};
	}
	Some(limbs)
}

fn address_text(value: &Value) -> Option<String> {
	let Value::Union(address) = value else {
		return None;
	};
	if address.type_name.as_ref() != "ScAddress" {
		return None;
	}
	let arm = address.arm.as_ref()?;
	match address.variant.as_ref() {
		"scAddressTypeAccount" => {
			let key = account_key_bytes(&arm.value)?;
			Some(strkey::encode_account(&key))
		}
		"scAddressTypeContract" => {
			let id = bytes32(&arm.value)?;
			Some(strkey::encode_contract(&id))
		}
		_ => None,
	}
}

/// An accountId is a `PublicKey` union whose only arm carries the raw key.
fn account_key_bytes(value: &Value) -> Option<[u8; 32]> {
	let Value::Union(key) = value else {
		return None;
	};
	bytes32(&key.arm.as_ref()?.value)
}

fn bytes32(value: &Value) -> Option<[u8; 32]> {
	match value {
		Value::Bytes(bytes) => <[u8; 32]>::try_from(bytes.as_slice()).ok(),
		_ => None,
	}
}

/// Base64 of a wasm executable hash. The stellar-asset executable has no
/// hash, so the instance falls back to the generic traversal.
fn instance_wasm_hash(value: &Value) -> Option<String> {
	let instance = struct_value(value, "ScContractInstance")?;
	let Value::Union(executable) = field_value(&instance.fields, "executable")? else {
		return None;
	};
	match &executable.arm.as_ref()?.value {
		Value::Bytes(hash) => Some(STANDARD.encode(hash)),
		_ => None,
	}
}

fn nonce_text(value: &Value) -> Option<String> {
	let key = struct_value(value, "ScNonceKey")?;
	match field_value(&key.fields, "nonce")? {
		Value::Hyper(nonce) => Some(nonce.to_string()),
		_ => None,
	}
}

/// Flatten an `ScMap` into one JSON object. An absent optional map has no
/// display and traverses generically.
fn map_display(value: &Value) -> Option<DisplayValue> {
	if matches!(value, Value::Void) {
		return None;
	}
	native_map(value).map(DisplayValue::Map)
}

fn native_map(value: &Value) -> Option<serde_json::Map<String, serde_json::Value>> {
	let Value::Array(entries) = value else {
		return None;
	};
	let mut object = serde_json::Map::new();
	for entry in entries {
		let Value::Struct(pair) = entry else {
			return None;
		};
		let key = native_key(field_value(&pair.fields, "key")?);
		object.insert(key, native_json(field_value(&pair.fields, "val")?));
	}
	Some(object)
}

/// JSON object keys are strings; string-shaped values keep their text,
/// everything else keys by its compact JSON rendering.
fn native_key(value: &Value) -> String {
	match native_json(value) {
		serde_json::Value::String(text) => text,
		other => other.to_string(),
	}
}

/// Native JSON form of an `ScVal` for embedding in map displays.
///
/// Word-sized numbers become JSON numbers; anything 64-bit and wider is a
/// decimal string at every nesting level, so a consumer never loses
/// precision to a float parse.
fn native_json(value: &Value) -> serde_json::Value {
	let Value::Union(scval) = value else {
		return serde_json::Value::Null;
	};
	if scval.type_name.as_ref() != "ScVal" {
		return serde_json::Value::Null;
	}
	let Some(arm) = scval.arm.as_ref() else {
		return serde_json::Value::Null;
	};
	match scval.variant.as_ref() {
		"scvBool" => match arm.value {
			Value::Bool(value) => serde_json::Value::Bool(value),
			_ => serde_json::Value::Null,
		},
		"scvU32" => match arm.value {
			Value::Uint(value) => serde_json::Value::from(value),
			_ => serde_json::Value::Null,
		},
		"scvI32" => match arm.value {
			Value::Int(value) => serde_json::Value::from(value),
			_ => serde_json::Value::Null,
		},
		"scvU64" | "scvTimepoint" | "scvDuration" => match arm.value {
			Value::Uhyper(value) => serde_json::Value::String(value.to_string()),
			_ => serde_json::Value::Null,
		},
		"scvI64" => match arm.value {
			Value::Hyper(value) => serde_json::Value::String(value.to_string()),
			_ => serde_json::Value::Null,
		},
		"scvU128" => match u128_parts(&arm.value) {
			Some(value) => serde_json::Value::String(value.to_string()),
			None => serde_json::Value::Null,
		},
		"scvI128" => match i128_parts(&arm.value) {
			Some(value) => serde_json::Value::String(value.to_string()),
			None => serde_json::Value::Null,
		},
		"scvU256" => match parts_256(&arm.value) {
			Some(limbs) => serde_json::Value::String(num::u256_to_decimal(limbs)),
			None => serde_json::Value::Null,
		},
		"scvI256" => match parts_256(&arm.value) {
			Some(limbs) => serde_json::Value::String(num::i256_to_decimal(limbs)),
			None => serde_json::Value::Null,
		},
		"scvBytes" => match &arm.value {
			Value::Bytes(bytes) => serde_json::Value::from(bytes.clone()),
			_ => serde_json::Value::Null,
		},
		"scvString" | "scvSymbol" => match &arm.value {
			Value::String(text) => serde_json::Value::String(text.to_string()),
			_ => serde_json::Value::Null,
		},
		"scvAddress" => match address_text(&arm.value) {
			Some(address) => serde_json::Value::String(address),
			None => serde_json::Value::Null,
		},
		"scvLedgerKeyNonce" => match nonce_text(&arm.value) {
			Some(nonce) => serde_json::Value::String(nonce),
			None => serde_json::Value::Null,
		},
		"scvError" => match error_code(&arm.value) {
			Some(code) => serde_json::Value::from(code),
			None => serde_json::Value::Null,
		},
		"scvVec" => match &arm.value {
			Value::Array(elems) => serde_json::Value::Array(elems.iter().map(native_json).collect()),
			_ => serde_json::Value::Null,
		},
		"scvMap" => match native_map(&arm.value) {
			Some(object) => serde_json::Value::Object(object),
			None => serde_json::Value::Null,
		},
		_ => serde_json::Value::Null,
	}
}
