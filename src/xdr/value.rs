/// One decoded XDR value.
///
/// The variant set is closed: every value the decoder can produce is one of
/// these, so classification during tree building is a plain `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// XDR void, or an absent optional.
	Void,
	/// 4-byte boolean.
	Bool(bool),
	/// Signed 32-bit integer.
	Int(i32),
	/// Unsigned 32-bit integer.
	Uint(u32),
	/// Signed 64-bit integer (XDR hyper).
	Hyper(i64),
	/// Unsigned 64-bit integer (XDR unsigned hyper).
	Uhyper(u64),
	/// Fixed or variable-length opaque bytes.
	Bytes(Vec<u8>),
	/// XDR string, decoded as lossy UTF-8.
	String(Box<str>),
	/// Enum member.
	Enum(EnumValue),
	/// Fixed or variable-length array.
	Array(Vec<Value>),
	/// Struct with named fields in declaration order.
	Struct(StructValue),
	/// Tagged union with its active arm.
	Union(Box<UnionValue>),
}

impl Value {
	/// Short name for the value's runtime shape, used in error reports.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Void => "void",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Uint(_) => "uint",
			Value::Hyper(_) => "hyper",
			Value::Uhyper(_) => "uhyper",
			Value::Bytes(_) => "bytes",
			Value::String(_) => "string",
			Value::Enum(_) => "enum",
			Value::Array(_) => "array",
			Value::Struct(_) => "struct",
			Value::Union(_) => "union",
		}
	}
}

/// One decoded enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
	/// Declared member name.
	pub name: Box<str>,
	/// Wire discriminant.
	pub value: i32,
}

/// One decoded struct instance.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Struct type name from the registry.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

/// One named field value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field accessor name.
	pub name: Box<str>,
	/// Decoded value.
	pub value: Value,
}

/// One decoded union instance.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionValue {
	/// Union type name from the registry.
	pub type_name: Box<str>,
	/// Active variant label (enum member name, or decimal for int switches).
	pub variant: Box<str>,
	/// Wire discriminant.
	pub discriminant: i32,
	/// Arm accessor name and payload; `None` for void arms.
	pub arm: Option<FieldValue>,
}
