use crate::xdr::{Result, XdrError};

/// Bounded cursor over an immutable XDR payload.
///
/// All multi-byte reads are big-endian, per RFC 4506.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(XdrError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_be_bytes(buf))
	}

	/// Read a big-endian `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_be_bytes(buf))
	}

	/// Read a big-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(u64::from_be_bytes(buf))
	}

	/// Read a big-endian `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		let raw = self.read_exact(8)?;
		let mut buf = [0_u8; 8];
		buf.copy_from_slice(raw);
		Ok(i64::from_be_bytes(buf))
	}

	/// Read `len` opaque bytes plus the zero padding up to a 4-byte boundary.
	pub fn read_opaque(&mut self, len: usize) -> Result<&'a [u8]> {
		let data = self.read_exact(len)?;
		let pad = (4 - len % 4) % 4;
		let _ = self.read_exact(pad)?;
		Ok(data)
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::xdr::XdrError;

	#[test]
	fn reads_are_big_endian() {
		let mut cursor = Cursor::new(&[0, 0, 0, 7, 0xFF, 0xFF, 0xFF, 0xFE]);
		assert_eq!(cursor.read_u32().expect("u32 reads"), 7);
		assert_eq!(cursor.read_i32().expect("i32 reads"), -2);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn opaque_read_consumes_padding() {
		let mut cursor = Cursor::new(&[1, 2, 3, 0, 0, 0, 0, 9]);
		let data = cursor.read_opaque(3).expect("opaque reads");
		assert_eq!(data, &[1, 2, 3]);
		assert_eq!(cursor.pos(), 4);

		let data = cursor.read_opaque(4).expect("aligned opaque reads");
		assert_eq!(data, &[0, 0, 0, 9]);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn short_read_reports_offset_and_need() {
		let mut cursor = Cursor::new(&[0, 0]);
		let err = cursor.read_u32().expect_err("read past end fails");
		match err {
			XdrError::UnexpectedEof { at, need, rem } => {
				assert_eq!(at, 0);
				assert_eq!(need, 4);
				assert_eq!(rem, 2);
			}
			other => panic!("expected UnexpectedEof, got {other:?}"),
		}
	}
}
