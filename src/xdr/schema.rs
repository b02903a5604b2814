use crate::xdr::registry::REGISTRY;

/// One XDR type definition.
///
/// Composite and union types declare their field/arm lists statically, so
/// the decoder never introspects anything at runtime.
#[derive(Debug, Clone, Copy)]
pub enum TypeDef {
	/// Signed 32-bit integer.
	Int,
	/// Unsigned 32-bit integer.
	Uint,
	/// Signed 64-bit integer.
	Hyper,
	/// Unsigned 64-bit integer.
	Uhyper,
	/// 4-byte boolean.
	Bool,
	/// Variable-length string with optional declared maximum.
	String {
		/// Maximum byte length, if declared.
		max: Option<u32>,
	},
	/// Fixed-length opaque bytes.
	OpaqueFixed {
		/// Exact byte length.
		len: u32,
	},
	/// Variable-length opaque bytes with optional declared maximum.
	OpaqueVar {
		/// Maximum byte length, if declared.
		max: Option<u32>,
	},
	/// Variable-length array of a named element type.
	ArrayVar {
		/// Element type name.
		elem: &'static str,
		/// Maximum element count, if declared.
		max: Option<u32>,
	},
	/// Struct with named fields in declaration order.
	Struct {
		/// Field declarations.
		fields: &'static [FieldDef],
	},
	/// Enum with declared members.
	Enum {
		/// Member declarations.
		members: &'static [EnumMember],
	},
	/// Tagged union.
	Union(UnionDef),
}

/// One named field or arm declaration.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
	/// Field accessor name.
	pub name: &'static str,
	/// Field type name.
	pub type_name: &'static str,
	/// Whether the field is an XDR optional (`T*`).
	pub optional: bool,
}

/// One enum member declaration.
#[derive(Debug, Clone, Copy)]
pub struct EnumMember {
	/// Member name.
	pub name: &'static str,
	/// Wire discriminant.
	pub value: i32,
}

/// Union switch discriminant kind.
#[derive(Debug, Clone, Copy)]
pub enum Discriminant {
	/// Switch over a named enum; variants are labeled by member name.
	Enum(&'static str),
	/// Switch over a raw signed int; variants are labeled by value.
	Int,
}

/// One union type declaration.
#[derive(Debug, Clone, Copy)]
pub struct UnionDef {
	/// Switch discriminant kind.
	pub switch: Discriminant,
	/// Declared arms.
	pub arms: &'static [ArmDef],
	/// Default arm body for discriminants with no explicit case.
	pub default: Option<ArmBody>,
}

/// One union arm covering one or more case values.
#[derive(Debug, Clone, Copy)]
pub struct ArmDef {
	/// Case discriminants selecting this arm.
	pub cases: &'static [i32],
	/// Arm body.
	pub body: ArmBody,
}

/// Payload carried by a union arm.
#[derive(Debug, Clone, Copy)]
pub enum ArmBody {
	/// Void arm: no payload.
	Void,
	/// Named payload accessor and its type.
	Field(FieldDef),
}

impl UnionDef {
	/// Return the arm body selected by `discriminant`, if any.
	pub fn body_for(&self, discriminant: i32) -> Option<ArmBody> {
		for arm in self.arms {
			if arm.cases.contains(&discriminant) {
				return Some(arm.body);
			}
		}
		self.default
	}
}

/// Look up a registry entry by type name.
pub fn entry(name: &str) -> Option<&'static TypeEntry> {
	REGISTRY.iter().find(|entry| entry.name == name)
}

/// Look up a type definition by registry name.
pub fn type_def(name: &str) -> Option<&'static TypeDef> {
	entry(name).map(|entry| &entry.def)
}

/// Iterate all registered type names in declaration order.
pub fn type_names() -> impl Iterator<Item = &'static str> {
	REGISTRY.iter().map(|entry| entry.name)
}

/// One named registry entry.
#[derive(Debug)]
pub struct TypeEntry {
	/// Registry type name.
	pub name: &'static str,
	/// Definition.
	pub def: TypeDef,
}
