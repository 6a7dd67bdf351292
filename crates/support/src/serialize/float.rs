/// Formats `value` with `precision` significant digits, choosing fixed or
/// scientific notation like C's `%g`.
///
/// Scientific notation is used when the decimal exponent is below -4 or not
/// below `precision`. Trailing fractional zeros are dropped and exponents
/// carry a sign and at least two digits (`1.5e+20`).
pub fn format_general(value: f64, precision: usize) -> String {
	if value.is_nan() {
		return "nan".to_string();
	}
	if value.is_infinite() {
		return if value < 0.0 { "-inf" } else { "inf" }.to_string();
	}
	if value == 0.0 {
		return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
	}

	let precision = precision.max(1);
	let scientific = format!("{:.*e}", precision - 1, value);
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return scientific;
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return scientific;
	};

	if exponent < -4 || exponent >= precision as i32 {
		let sign = if exponent < 0 { '-' } else { '+' };
		format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
	} else {
		let decimals = (precision as i32 - 1 - exponent) as usize;
		trim_fraction(&format!("{value:.decimals$}")).to_string()
	}
}

fn trim_fraction(digits: &str) -> &str {
	if digits.contains('.') {
		digits.trim_end_matches('0').trim_end_matches('.')
	} else {
		digits
	}
}
