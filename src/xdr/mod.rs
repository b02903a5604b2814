mod amount;
mod bytes;
mod decode;
mod display;
mod error;
mod leaf;
mod num;
mod registry;
mod schema;
mod scval;
mod strkey;
mod tree;
mod value;

/// Fixed-point amount rendering.
pub use amount::format_amount;
/// Schema-driven decoding entry point and limits.
pub use decode::{DecodeOptions, decode_value};
/// Typed display value attached to tree nodes.
pub use display::DisplayValue;
/// Error and result aliases.
pub use error::{Result, XdrError};
/// Field-name display rules and leaf rendering.
pub use leaf::{FormatRules, leaf_display};
/// Static schema representation and registry lookups.
pub use schema::{ArmBody, ArmDef, Discriminant, EnumMember, FieldDef, TypeDef, TypeEntry, UnionDef, entry, type_def, type_names};
/// Contract value rendering.
pub use scval::sc_val_display;
/// Strkey address encoding.
pub use strkey::{encode_account, encode_contract};
/// Display tree types and entry points.
pub use tree::{TreeNode, build_tree, build_tree_with};
/// Decoded runtime value types.
pub use value::{EnumValue, FieldValue, StructValue, UnionValue, Value};
