use crate::xdr::bytes::Cursor;
use crate::xdr::schema::{self, ArmBody, Discriminant, FieldDef, TypeDef, UnionDef};
use crate::xdr::value::{EnumValue, FieldValue, StructValue, UnionValue, Value};
use crate::xdr::{Result, XdrError};

/// Runtime limits for schema-driven decoding.
///
/// Declared schema bounds (string and array maxima) are always enforced; the
/// limits here guard against hostile inputs on types whose schema declares no
/// bound of its own.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nesting depth before decoding aborts.
	pub max_depth: u32,
	/// Maximum element count accepted for any single array.
	pub max_array_elems: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 64, max_array_elems: 4096 }
	}
}

/// Decode `bytes` as the registered type `type_name`.
///
/// The whole input must belong to the value: trailing bytes are rejected, so
/// a wrong type name fails loudly instead of yielding a half-plausible tree.
pub fn decode_value(bytes: &[u8], type_name: &str, opt: &DecodeOptions) -> Result<Value> {
	let entry = schema::entry(type_name).ok_or_else(|| XdrError::UnknownType { name: type_name.to_owned() })?;
	let mut cursor = Cursor::new(bytes);
	let value = decode_type(&mut cursor, entry.name, &entry.def, opt, 0)?;
	if cursor.remaining() > 0 {
		return Err(XdrError::TrailingBytes { type_name: type_name.to_owned(), leftover: cursor.remaining() });
	}
	Ok(value)
}

fn decode_type(cursor: &mut Cursor<'_>, name: &'static str, def: &TypeDef, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(XdrError::DepthExceeded { max_depth: opt.max_depth });
	}

	match def {
		TypeDef::Int => Ok(Value::Int(cursor.read_i32()?)),
		TypeDef::Uint => Ok(Value::Uint(cursor.read_u32()?)),
		TypeDef::Hyper => Ok(Value::Hyper(cursor.read_i64()?)),
		TypeDef::Uhyper => Ok(Value::Uhyper(cursor.read_u64()?)),
		TypeDef::Bool => {
			let at = cursor.pos();
			match cursor.read_u32()? {
				0 => Ok(Value::Bool(false)),
				1 => Ok(Value::Bool(true)),
				value => Err(XdrError::InvalidBool { value, at }),
			}
		}
		TypeDef::String { max } => {
			let len = read_declared_len(cursor, *max, 1)?;
			let bytes = cursor.read_opaque(len)?;
			Ok(Value::String(String::from_utf8_lossy(bytes).into_owned().into_boxed_str()))
		}
		TypeDef::OpaqueFixed { len } => Ok(Value::Bytes(cursor.read_opaque(*len as usize)?.to_vec())),
		TypeDef::OpaqueVar { max } => {
			let len = read_declared_len(cursor, *max, 1)?;
			Ok(Value::Bytes(cursor.read_opaque(len)?.to_vec()))
		}
		TypeDef::ArrayVar { elem, max } => {
			// every element occupies at least one 4-byte word
			let count = read_declared_len(cursor, *max, 4)?;
			if count > opt.max_array_elems {
				return Err(XdrError::ArrayTooLarge { count, max: opt.max_array_elems });
			}
			let entry = schema::entry(elem).ok_or(XdrError::UnknownTypeRef { name: elem })?;
			let mut items = Vec::with_capacity(count);
			for _ in 0..count {
				items.push(decode_type(cursor, entry.name, &entry.def, opt, depth + 1)?);
			}
			Ok(Value::Array(items))
		}
		TypeDef::Struct { fields } => {
			let mut out = Vec::with_capacity(fields.len());
			for field in *fields {
				let value = decode_field(cursor, field, opt, depth + 1)?;
				out.push(FieldValue { name: field.name.into(), value });
			}
			Ok(Value::Struct(StructValue { type_name: name.into(), fields: out }))
		}
		TypeDef::Enum { members } => {
			let value = cursor.read_i32()?;
			let member = members
				.iter()
				.find(|member| member.value == value)
				.ok_or(XdrError::InvalidEnumValue { enum_name: name, value })?;
			Ok(Value::Enum(EnumValue { name: member.name.into(), value }))
		}
		TypeDef::Union(union) => decode_union(cursor, name, union, opt, depth),
	}
}

fn decode_field(cursor: &mut Cursor<'_>, field: &FieldDef, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if field.optional {
		let at = cursor.pos();
		match cursor.read_u32()? {
			0 => return Ok(Value::Void),
			1 => {}
			value => return Err(XdrError::InvalidOptionMarker { value, at }),
		}
	}
	let entry = schema::entry(field.type_name).ok_or(XdrError::UnknownTypeRef { name: field.type_name })?;
	decode_type(cursor, entry.name, &entry.def, opt, depth)
}

fn decode_union(cursor: &mut Cursor<'_>, name: &'static str, union: &UnionDef, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let discriminant = cursor.read_i32()?;
	let variant: Box<str> = match union.switch {
		Discriminant::Enum(switch) => {
			let Some(TypeDef::Enum { members }) = schema::type_def(switch) else {
				return Err(XdrError::UnknownTypeRef { name: switch });
			};
			let member = members
				.iter()
				.find(|member| member.value == discriminant)
				.ok_or(XdrError::InvalidEnumValue { enum_name: switch, value: discriminant })?;
			member.name.into()
		}
		Discriminant::Int => discriminant.to_string().into_boxed_str(),
	};
	let body = union
		.body_for(discriminant)
		.ok_or(XdrError::NoUnionArm { type_name: name, discriminant })?;
	let arm = match body {
		ArmBody::Void => None,
		ArmBody::Field(field) => {
			let value = decode_field(cursor, &field, opt, depth + 1)?;
			Some(FieldValue { name: field.name.into(), value })
		}
	};
	Ok(Value::Union(Box::new(UnionValue { type_name: name.into(), variant, discriminant, arm })))
}

/// Read a length prefix and sanity-check it against the declared schema
/// bound and the bytes actually left in the input.
fn read_declared_len(cursor: &mut Cursor<'_>, max: Option<u32>, min_elem_size: usize) -> Result<usize> {
	let at = cursor.pos();
	let len = cursor.read_u32()?;
	if let Some(max) = max {
		if len > max {
			return Err(XdrError::LengthOutOfRange { len, max });
		}
	}
	let len = len as usize;
	let need = len.saturating_mul(min_elem_size);
	if need > cursor.remaining() {
		return Err(XdrError::UnexpectedEof { at, need, rem: cursor.remaining() });
	}
	Ok(len)
}

#[cfg(test)]
mod tests;
