/// Display tree command.
pub mod tree;
/// Registry listing command.
pub mod types;
/// Shared CLI helpers.
pub(crate) mod util;
