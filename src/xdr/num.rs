//! Wide integer assembly for decoded contract values.
//!
//! 128-bit values fit native integers; 256-bit values are rendered straight
//! from their four big-endian limbs by repeated division.

/// Assemble an unsigned 128-bit value from its hi/lo words.
pub fn u128_from_parts(hi: u64, lo: u64) -> u128 {
	(u128::from(hi) << 64) | u128::from(lo)
}

/// Assemble a signed 128-bit value from its hi/lo words.
pub fn i128_from_parts(hi: i64, lo: u64) -> i128 {
	(i128::from(hi) << 64) | i128::from(lo)
}

/// Render an unsigned 256-bit value, given as four big-endian limbs.
pub fn u256_to_decimal(limbs: [u64; 4]) -> String {
	// largest power of ten below 2^64, so each division step stays in u128
	const CHUNK: u128 = 10_000_000_000_000_000_000;

	if limbs == [0; 4] {
		return "0".to_owned();
	}

	let mut limbs = limbs;
	let mut chunks: Vec<u64> = Vec::new();
	while limbs != [0; 4] {
		let mut rem: u128 = 0;
		for limb in &mut limbs {
			let cur = (rem << 64) | u128::from(*limb);
			*limb = (cur / CHUNK) as u64;
			rem = cur % CHUNK;
		}
		chunks.push(rem as u64);
	}

	let mut out = String::new();
	let mut rest = chunks.iter().rev();
	if let Some(first) = rest.next() {
		out.push_str(&first.to_string());
	}
	for chunk in rest {
		out.push_str(&format!("{chunk:019}"));
	}
	out
}

/// Render a signed 256-bit value (two's complement over four limbs).
pub fn i256_to_decimal(limbs: [u64; 4]) -> String {
	if limbs[0] & (1 << 63) == 0 {
		return u256_to_decimal(limbs);
	}
	let mut magnitude = limbs.map(|limb| !limb);
	let mut carry = 1_u64;
	for limb in magnitude.iter_mut().rev() {
		let (sum, overflow) = limb.overflowing_add(carry);
		*limb = sum;
		carry = u64::from(overflow);
		if carry == 0 {
			break;
		}
	}
	format!("-{}", u256_to_decimal(magnitude))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn half_words_assemble() {
		assert_eq!(u128_from_parts(0, 42), 42);
		assert_eq!(u128_from_parts(1, 0), 1_u128 << 64);
		assert_eq!(u128_from_parts(u64::MAX, u64::MAX), u128::MAX);

		assert_eq!(i128_from_parts(0, 7), 7);
		assert_eq!(i128_from_parts(-1, u64::MAX), -1);
		assert_eq!(i128_from_parts(i64::MIN, 0), i128::MIN);
	}

	#[test]
	fn unsigned_256_renders_in_decimal() {
		assert_eq!(u256_to_decimal([0; 4]), "0");
		assert_eq!(u256_to_decimal([0, 0, 0, 5]), "5");
		assert_eq!(u256_to_decimal([0, 0, 1, 0]), "18446744073709551616");
		assert_eq!(u256_to_decimal([0, 1, 0, 0]), "340282366920938463463374607431768211456");
		assert_eq!(
			u256_to_decimal([u64::MAX; 4]),
			"115792089237316195423570985008687907853269984665640564039457584007913129639935"
		);
	}

	#[test]
	fn signed_256_negates_two_complement() {
		assert_eq!(i256_to_decimal([0, 0, 0, 7]), "7");
		assert_eq!(i256_to_decimal([u64::MAX; 4]), "-1");
		assert_eq!(
			i256_to_decimal([1 << 63, 0, 0, 0]),
			"-57896044618658097711785492504343953926634992332820282019728792003956564819968"
		);
	}
}
