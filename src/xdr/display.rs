use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value as JsonValue};

/// One formatted leaf value in a display tree.
///
/// Scalar variants serialize bare. `Amount` serializes as
/// `{"type":"amount","value":{"parsed":...,"raw":...}}` and `Code` as
/// `{"type":"code","value":...}` with a `raw` byte array when the code wraps
/// an actual buffer. These shapes are what downstream renderers consume, so
/// they are written out by hand rather than derived.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
	/// Plain text.
	Text(String),
	/// Boolean from a decoded contract value.
	Bool(bool),
	/// Bare numeric code, e.g. a contract error code.
	Int(i64),
	/// Raw bytes, serialized as a JSON byte array.
	Bytes(Vec<u8>),
	/// Fixed-point amount in both parsed and raw form.
	Amount {
		/// Decimal string with seven fractional digits.
		parsed: String,
		/// The raw integer, in decimal string form.
		raw: String,
	},
	/// Address-like string: strkey, masked hint, or base64 byte code.
	Code {
		/// Rendered display string.
		value: String,
		/// Original bytes, for codes derived from an opaque buffer.
		raw: Option<Vec<u8>>,
	},
	/// Structured map from a decoded contract map.
	Map(Map<String, JsonValue>),
}

impl Serialize for DisplayValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			DisplayValue::Text(text) => serializer.serialize_str(text),
			DisplayValue::Bool(value) => serializer.serialize_bool(*value),
			DisplayValue::Int(value) => serializer.serialize_i64(*value),
			DisplayValue::Bytes(bytes) => bytes.serialize(serializer),
			DisplayValue::Amount { parsed, raw } => {
				let mut map = serializer.serialize_map(Some(2))?;
				map.serialize_entry("type", "amount")?;
				map.serialize_entry("value", &AmountBody { parsed, raw })?;
				map.end()
			}
			DisplayValue::Code { value, raw } => {
				let mut map = serializer.serialize_map(Some(if raw.is_some() { 3 } else { 2 }))?;
				map.serialize_entry("type", "code")?;
				if let Some(raw) = raw {
					map.serialize_entry("raw", raw)?;
				}
				map.serialize_entry("value", value)?;
				map.end()
			}
			DisplayValue::Map(map) => map.serialize(serializer),
		}
	}
}

#[derive(serde::Serialize)]
struct AmountBody<'a> {
	parsed: &'a str,
	raw: &'a str,
}

#[cfg(test)]
mod tests {
	use super::DisplayValue;

	fn json(value: &DisplayValue) -> serde_json::Value {
		serde_json::to_value(value).expect("display value serializes")
	}

	#[test]
	fn scalars_serialize_bare() {
		assert_eq!(json(&DisplayValue::Text("hi".into())), serde_json::json!("hi"));
		assert_eq!(json(&DisplayValue::Bool(true)), serde_json::json!(true));
		assert_eq!(json(&DisplayValue::Int(-3)), serde_json::json!(-3));
		assert_eq!(json(&DisplayValue::Bytes(vec![1, 2, 255])), serde_json::json!([1, 2, 255]));
	}

	#[test]
	fn amount_keeps_both_forms() {
		let amount = DisplayValue::Amount { parsed: "150.0000000".into(), raw: "1500000000".into() };
		assert_eq!(
			json(&amount),
			serde_json::json!({ "type": "amount", "value": { "parsed": "150.0000000", "raw": "1500000000" } })
		);
	}

	#[test]
	fn code_raw_field_is_optional() {
		let plain = DisplayValue::Code { value: "GABC".into(), raw: None };
		assert_eq!(json(&plain), serde_json::json!({ "type": "code", "value": "GABC" }));

		let wrapped = DisplayValue::Code { value: "AQI=".into(), raw: Some(vec![1, 2]) };
		assert_eq!(json(&wrapped), serde_json::json!({ "type": "code", "raw": [1, 2], "value": "AQI=" }));
	}
}
