//! Decode Stellar XDR records and build display trees for inspection UIs.

/// XDR schema registry, decoder, and display tree construction.
pub mod xdr;
