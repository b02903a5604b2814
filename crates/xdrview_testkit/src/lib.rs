//! Shared test fixtures for workspace crates.
//!
//! [`XdrWriter`] lays out RFC 4506 wire bytes by hand so tests control
//! every word; the envelope builders produce small canonical transactions
//! shared by unit and integration tests.

/// ed25519 public key from the published strkey test vectors.
pub const SAMPLE_ACCOUNT_KEY: [u8; 32] = [
	0x3f, 0x0c, 0x34, 0xbf, 0x93, 0xad, 0x0d, 0x99, 0x71, 0xd0, 0x4c, 0xcc, 0x90, 0xf7, 0x05, 0x51,
	0x1c, 0x83, 0x8a, 0xad, 0x97, 0x34, 0xa4, 0xa2, 0xfb, 0x0d, 0x7a, 0x03, 0xfc, 0x7f, 0xe8, 0x9a,
];

/// Account strkey of [`SAMPLE_ACCOUNT_KEY`].
pub const SAMPLE_ACCOUNT_ADDRESS: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

/// Contract strkey of [`SAMPLE_ACCOUNT_KEY`] reused as a contract id.
pub const SAMPLE_CONTRACT_ADDRESS: &str = "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA";

/// Signature hint carried by [`payment_envelope`].
pub const SAMPLE_SIGNATURE_HINT: [u8; 4] = [0xAA, 0xBB, 0xCC, 0xDD];

/// Big-endian XDR byte writer.
#[derive(Debug, Default)]
pub struct XdrWriter {
	bytes: Vec<u8>,
}

impl XdrWriter {
	/// New empty writer.
	pub fn new() -> Self {
		Self { bytes: Vec::new() }
	}

	/// Append a big-endian unsigned 32-bit word.
	pub fn u32(&mut self, value: u32) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Append a big-endian signed 32-bit word.
	pub fn i32(&mut self, value: i32) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Append a big-endian unsigned 64-bit word.
	pub fn u64(&mut self, value: u64) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Append a big-endian signed 64-bit word.
	pub fn i64(&mut self, value: i64) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Append an optional-presence marker.
	pub fn present(&mut self, present: bool) {
		self.u32(u32::from(present));
	}

	/// Append a variable-length count prefix.
	pub fn array_len(&mut self, len: u32) {
		self.u32(len);
	}

	/// Append a length-prefixed string with XDR padding.
	pub fn string(&mut self, text: &str) {
		self.opaque_var(text.as_bytes());
	}

	/// Append length-prefixed opaque bytes with XDR padding.
	pub fn opaque_var(&mut self, bytes: &[u8]) {
		self.u32(bytes.len() as u32);
		self.opaque_fixed(bytes);
	}

	/// Append pre-encoded bytes verbatim.
	pub fn raw(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
	}

	/// Append opaque bytes padded to the next 4-byte boundary.
	pub fn opaque_fixed(&mut self, bytes: &[u8]) {
		self.bytes.extend_from_slice(bytes);
		let pad = (4 - bytes.len() % 4) % 4;
		self.bytes.extend_from_slice(&[0, 0, 0][..pad]);
	}

	/// Finish and return the accumulated bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

/// Canonical v1 envelope: one native payment of 150.0000000 from the
/// sample account back to itself, memo text `hello`, one signature whose
/// hint is [`SAMPLE_SIGNATURE_HINT`].
pub fn payment_envelope() -> Vec<u8> {
	let mut w = XdrWriter::new();
	w.i32(2); // envelopeTypeTx

	w.i32(0); // sourceAccount: keyTypeEd25519
	w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
	w.u32(100); // fee
	w.i64(12_345_678_901); // seqNum
	w.i32(0); // cond: precondNone
	w.i32(1); // memo: memoText
	w.string("hello");
	w.array_len(1); // operations
	w.present(false); // operation sourceAccount absent
	w.i32(1); // body: payment
	w.i32(0); // destination: keyTypeEd25519
	w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
	w.i32(0); // asset: assetTypeNative
	w.i64(1_500_000_000); // amount
	w.i32(0); // ext

	w.array_len(1); // signatures
	w.opaque_fixed(&SAMPLE_SIGNATURE_HINT);
	w.opaque_var(&[0x01; 64]);
	w.into_bytes()
}

/// v1 envelope carrying one create-account operation and no signatures.
pub fn create_account_envelope() -> Vec<u8> {
	let mut w = XdrWriter::new();
	w.i32(2); // envelopeTypeTx

	w.i32(0); // sourceAccount: keyTypeEd25519
	w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
	w.u32(200); // fee
	w.i64(77); // seqNum
	w.i32(0); // cond: precondNone
	w.i32(0); // memo: memoNone
	w.array_len(1); // operations
	w.present(false); // operation sourceAccount absent
	w.i32(0); // body: createAccount
	w.i32(0); // destination: publicKeyTypeEd25519
	w.opaque_fixed(&SAMPLE_ACCOUNT_KEY);
	w.i64(250_000_000); // startingBalance
	w.i32(0); // ext

	w.array_len(0); // signatures
	w.into_bytes()
}
