use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, XdrError>;

/// Errors produced while decoding XDR data and building display trees.
#[derive(Debug, Error)]
pub enum XdrError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid base64.
	#[error("invalid base64 input: {0}")]
	Base64(#[from] base64::DecodeError),
	/// Requested type name is not in the schema registry.
	#[error("unknown XDR type: {name}")]
	UnknownType {
		/// Requested type name.
		name: String,
	},
	/// A schema definition referenced a type name with no registry entry.
	#[error("schema reference to unknown type: {name}")]
	UnknownTypeRef {
		/// Dangling type name inside a field, arm, or element definition.
		name: &'static str,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Input bytes remained after the root value was fully decoded.
	#[error("trailing bytes after {type_name}: {leftover} undecoded")]
	TrailingBytes {
		/// Root type name being decoded.
		type_name: String,
		/// Unconsumed byte count.
		leftover: usize,
	},
	/// Boolean marker was neither 0 nor 1.
	#[error("invalid bool marker {value} at offset {at}")]
	InvalidBool {
		/// Decoded marker value.
		value: u32,
		/// Byte offset of the marker.
		at: usize,
	},
	/// Optional-presence marker was neither 0 nor 1.
	#[error("invalid optional marker {value} at offset {at}")]
	InvalidOptionMarker {
		/// Decoded marker value.
		value: u32,
		/// Byte offset of the marker.
		at: usize,
	},
	/// Enum discriminant did not match any declared member.
	#[error("invalid value {value} for enum {enum_name}")]
	InvalidEnumValue {
		/// Enum type name.
		enum_name: &'static str,
		/// Decoded discriminant.
		value: i32,
	},
	/// Union discriminant matched no arm and the union has no default arm.
	#[error("union {type_name} has no arm for discriminant {discriminant}")]
	NoUnionArm {
		/// Union type name.
		type_name: &'static str,
		/// Decoded discriminant.
		discriminant: i32,
	},
	/// Declared variable length exceeded the schema maximum.
	#[error("length {len} exceeds declared maximum {max}")]
	LengthOutOfRange {
		/// Declared element or byte count.
		len: u32,
		/// Schema maximum.
		max: u32,
	},
	/// Declared array length exceeded the configured decode limit.
	#[error("decode array too large: count={count}, max={max}")]
	ArrayTooLarge {
		/// Declared element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Decoder recursion depth exceeded configured limit.
	#[error("decode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// The requested input could not be decoded as the requested type.
	#[error("input XDR could not be parsed as {type_name}: {source}")]
	Decode {
		/// Requested root type name.
		type_name: String,
		/// Underlying decode failure.
		#[source]
		source: Box<XdrError>,
	},
	/// A leaf value has no display rule and no textual form.
	#[error("no display form for leaf field {field} of kind {kind}")]
	UnsupportedLeaf {
		/// Field or accessor name that produced the leaf.
		field: String,
		/// Runtime shape of the offending value.
		kind: &'static str,
	},
}
