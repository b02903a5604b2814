/// Render a raw fixed-point amount as its decimal string.
///
/// Ledger amounts are 64-bit integers counting ten-millionths of a unit, so
/// `1_500_000_000` becomes `"150.0000000"`. The fractional part is always
/// exactly seven digits.
pub fn format_amount(raw: i64) -> String {
	let magnitude = i128::from(raw).unsigned_abs();
	let whole = magnitude / 10_000_000;
	let frac = magnitude % 10_000_000;
	let sign = if raw < 0 { "-" } else { "" };
	format!("{sign}{whole}.{frac:07}")
}

#[cfg(test)]
mod tests {
	use super::format_amount;

	#[test]
	fn whole_units() {
		assert_eq!(format_amount(1_500_000_000), "150.0000000");
		assert_eq!(format_amount(10_000_000), "1.0000000");
	}

	#[test]
	fn zero_and_smallest_step() {
		assert_eq!(format_amount(0), "0.0000000");
		assert_eq!(format_amount(1), "0.0000001");
		assert_eq!(format_amount(-1), "-0.0000001");
	}

	#[test]
	fn extremes_do_not_overflow() {
		assert_eq!(format_amount(i64::MAX), "922337203685.4775807");
		assert_eq!(format_amount(i64::MIN), "-922337203685.4775808");
	}
}
