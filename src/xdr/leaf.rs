use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::xdr::display::DisplayValue;
use crate::xdr::value::Value;
use crate::xdr::{Result, XdrError, amount, strkey};

/// Per-field display formatting, keyed by accessor name.
///
/// The default tables hold the canonical ledger field names. Formatting is
/// driven by the name alone, so the same tables apply wherever a field
/// appears in a tree; swapping in other tables changes rendering without
/// touching the tree builder.
#[derive(Debug, Clone)]
pub struct FormatRules {
	/// Rendered as fixed-point amounts.
	pub amount_fields: &'static [&'static str],
	/// Hold a 4-byte signature hint, rendered masked.
	pub hint_fields: &'static [&'static str],
	/// Hold raw ed25519 account keys, rendered as `G...` addresses.
	pub account_key_fields: &'static [&'static str],
	/// Hold NUL-padded asset codes, rendered as trimmed text.
	pub asset_code_fields: &'static [&'static str],
	/// Hold raw contract ids, rendered as `C...` addresses.
	pub contract_id_fields: &'static [&'static str],
	/// Hold symbolic names, rendered as plain text.
	pub symbol_fields: &'static [&'static str],
	/// Pass through in text form without byte wrapping.
	pub pass_through_fields: &'static [&'static str],
}

impl Default for FormatRules {
	fn default() -> Self {
		Self {
			amount_fields: &["amount", "startingBalance", "sendMax", "sendAmount", "destMin", "destAmount", "limit"],
			hint_fields: &["hint"],
			account_key_fields: &["ed25519", "sourceAccountEd25519"],
			asset_code_fields: &["assetCode", "assetCode4", "assetCode12"],
			contract_id_fields: &["contractId"],
			symbol_fields: &["functionName", "sym"],
			pass_through_fields: &["durability", "type", "map"],
		}
	}
}

enum FieldRule {
	Amount,
	SignatureHint,
	AccountKey,
	AssetCode,
	ContractId,
	Symbol,
	PassThrough,
}

impl FormatRules {
	// first matching table wins
	fn rule_for(&self, field: &str) -> Option<FieldRule> {
		if self.amount_fields.contains(&field) {
			Some(FieldRule::Amount)
		} else if self.hint_fields.contains(&field) {
			Some(FieldRule::SignatureHint)
		} else if self.account_key_fields.contains(&field) {
			Some(FieldRule::AccountKey)
		} else if self.asset_code_fields.contains(&field) {
			Some(FieldRule::AssetCode)
		} else if self.contract_id_fields.contains(&field) {
			Some(FieldRule::ContractId)
		} else if self.symbol_fields.contains(&field) {
			Some(FieldRule::Symbol)
		} else if self.pass_through_fields.contains(&field) {
			Some(FieldRule::PassThrough)
		} else {
			None
		}
	}
}

/// Format one decoded leaf for display under the accessor name `field`.
///
/// `Ok(None)` means the leaf is an absent optional and the node should carry
/// no value at all. A rule whose value has the wrong shape falls through to
/// the generic handling rather than failing.
pub fn leaf_display(value: &Value, field: &str, rules: &FormatRules) -> Result<Option<DisplayValue>> {
	match rules.rule_for(field) {
		Some(FieldRule::Amount) => {
			if let Some(display) = amount_display(value) {
				return Ok(Some(display));
			}
		}
		Some(FieldRule::SignatureHint) => {
			if let Value::Bytes(bytes) = value {
				if let Some(display) = hint_display(bytes) {
					return Ok(Some(display));
				}
			}
		}
		Some(FieldRule::AccountKey) => {
			if let Value::Bytes(bytes) = value {
				if let Ok(key) = <&[u8; 32]>::try_from(bytes.as_slice()) {
					return Ok(Some(DisplayValue::Code { value: strkey::encode_account(key), raw: None }));
				}
			}
		}
		Some(FieldRule::AssetCode) => {
			if let Value::Bytes(bytes) = value {
				let code = String::from_utf8_lossy(bytes);
				return Ok(Some(DisplayValue::Text(code.trim_end_matches('\0').to_owned())));
			}
		}
		Some(FieldRule::ContractId) => {
			if let Value::Bytes(bytes) = value {
				if let Ok(id) = <&[u8; 32]>::try_from(bytes.as_slice()) {
					return Ok(Some(DisplayValue::Text(strkey::encode_contract(id))));
				}
			}
		}
		Some(FieldRule::Symbol) => {
			if let Value::String(text) = value {
				return Ok(Some(DisplayValue::Text(text.to_string())));
			}
		}
		Some(FieldRule::PassThrough) => {
			if let Some(text) = text_form(value) {
				return Ok(Some(DisplayValue::Text(text)));
			}
		}
		None => {}
	}

	match value {
		Value::Void => Ok(None),
		Value::Bytes(bytes) => Ok(Some(DisplayValue::Code { value: STANDARD.encode(bytes), raw: Some(bytes.clone()) })),
		other => match text_form(other) {
			Some(text) => {
				tracing::debug!(field, kind = other.kind(), "leaf fell back to plain text form");
				Ok(Some(DisplayValue::Text(text)))
			}
			None => {
				tracing::warn!(field, kind = other.kind(), "leaf value has no display form");
				Err(XdrError::UnsupportedLeaf { field: field.to_owned(), kind: other.kind() })
			}
		},
	}
}

/// Generic text rendering for scalar leaves. Composite values have none.
fn text_form(value: &Value) -> Option<String> {
	match value {
		Value::Bool(value) => Some(value.to_string()),
		Value::Int(value) => Some(value.to_string()),
		Value::Uint(value) => Some(value.to_string()),
		Value::Hyper(value) => Some(value.to_string()),
		Value::Uhyper(value) => Some(value.to_string()),
		Value::String(text) => Some(text.to_string()),
		Value::Enum(member) => Some(member.name.to_string()),
		_ => None,
	}
}

fn amount_display(value: &Value) -> Option<DisplayValue> {
	let raw = match value {
		Value::Hyper(raw) => *raw,
		Value::Uhyper(raw) => i64::try_from(*raw).ok()?,
		_ => return None,
	};
	Some(DisplayValue::Amount { parsed: amount::format_amount(raw), raw: raw.to_string() })
}

/// Mask a 4-byte signature hint.
///
/// The hint is the tail of a signer's key, so encoding it padded into a full
/// key recovers the five address symbols (positions 47..52) that depend only
/// on those bytes. Everything else of the address is unknowable and printed
/// as underscores.
fn hint_display(bytes: &[u8]) -> Option<DisplayValue> {
	let hint: &[u8; 4] = bytes.try_into().ok()?;
	let mut key = [0_u8; 32];
	key[28..].copy_from_slice(hint);
	let encoded = strkey::encode_account(&key);
	let recovered = &encoded[47..52];
	Some(DisplayValue::Code { value: format!("G{}{}____", "_".repeat(46), recovered), raw: None })
}
