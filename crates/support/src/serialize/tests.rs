use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;
use crate::Text;

fn render(write: impl FnOnce(&mut Archive<Vec<u8>>) -> io::Result<()>) -> String {
	let mut ar = Archive::new(Vec::new());
	write(&mut ar).expect("writing to a Vec should not fail");
	String::from_utf8(ar.into_inner()).expect("archive output should be UTF-8")
}

#[rstest]
#[case::integer(42.0, "42")]
#[case::fraction(0.1, "0.1")]
#[case::third(1.0 / 3.0, "0.333333333333333")]
#[case::negative(-2.5, "-2.5")]
#[case::large_fixed(123456789012345.0, "123456789012345")]
#[case::large_scientific(1234567890123456.0, "1.23456789012346e+15")]
#[case::huge(1.5e20, "1.5e+20")]
#[case::small_fixed(0.0001, "0.0001")]
#[case::small_scientific(0.00001, "1e-05")]
#[case::tiny(2.5e-300, "2.5e-300")]
#[case::rounds_up(0.9999999999999999, "1")]
#[case::zero(0.0, "0")]
#[case::negative_zero(-0.0, "-0")]
#[case::infinity(f64::INFINITY, "inf")]
#[case::negative_infinity(f64::NEG_INFINITY, "-inf")]
#[case::nan(f64::NAN, "nan")]
fn float_precision(#[case] value: f64, #[case] expected: &str) {
	assert_eq!(format_general(value, FLOAT_PRECISION), expected);
}

#[test]
fn short_precision() {
	assert_eq!(format_general(3.14159, 3), "3.14");
	assert_eq!(format_general(1234.0, 3), "1.23e+03");
	assert_eq!(format_general(7.0, 0), "7");
}

#[test]
fn nvp_wraps_value_in_tags() {
	assert_eq!(render(|ar| ar.nvp("total", &17i64)), "<total>17</total>");
	assert_eq!(render(|ar| ar.nvp("avg", &0.5f64)), "<avg>0.5</avg>");
	assert_eq!(render(|ar| ar.nvp("name", "ASIA")), "<name>ASIA</name>");
}

#[test]
fn nvp_tabbed_prefixes_both_tags() {
	assert_eq!(render(|ar| ar.nvp_tabbed("count", &3usize, "\t")), "\t<count>3\t</count>");
}

#[test]
fn text_is_written_unquoted() {
	let region = Text::from("EUROPE");
	assert_eq!(render(|ar| ar.nvp("region", &region)), "<region>EUROPE</region>");
}

struct Revenue {
	nation: Text,
	amount: f64,
	orders: u32,
}

impl Serialize for Revenue {
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, _version: u32) -> io::Result<()> {
		ar.record(|ar| {
			ar.nvp("nation", &self.nation)?;
			ar.nvp("amount", &self.amount)?;
			ar.nvp("orders", &self.orders)
		})
	}
}

#[test]
fn record_ends_with_newline() {
	let row = Revenue {
		nation: Text::from("FRANCE"),
		amount: 1234.5678,
		orders: 9,
	};
	assert_eq!(
		render(|ar| ar.nvp("row", &row)),
		"<row><nation>FRANCE</nation><amount>1234.5678</amount><orders>9</orders>\n</row>"
	);
}

#[test]
fn nvp_macro_uses_binding_name() {
	let count = 12u64;
	let boxed = Box::new(2.25f64);
	let out = render(|ar| {
		crate::nvp!(ar, count)?;
		crate::nvp!(ar, *boxed)
	});
	assert_eq!(out, "<count>12</count><boxed>2.25</boxed>");
}

proptest! {
	#[test]
	fn general_format_reads_back_within_precision(value in -1e12f64..1e12) {
		let rendered = format_general(value, FLOAT_PRECISION);
		let parsed: f64 = rendered.parse().expect("rendered float should parse");
		let tolerance = value.abs().max(1e-300) * 1e-14;
		prop_assert!((parsed - value).abs() <= tolerance, "{} rendered as {}", value, rendered);
	}

	#[test]
	fn integers_render_in_decimal(value in any::<i64>()) {
		prop_assert_eq!(render(|ar| ar.value(&value)), value.to_string());
	}
}
