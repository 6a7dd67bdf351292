use std::io::{self, Write};

mod float;

#[cfg(test)]
mod tests;

pub use float::format_general;

/// Version number passed to every [`Serialize::serialize`] call.
pub const FORMAT_VERSION: u32 = 0;

/// Significant digits used for floating-point values.
pub const FLOAT_PRECISION: usize = 15;

/// A value that can be written into an [`Archive`].
pub trait Serialize {
	/// Writes `self` into `ar`.
	///
	/// Compound values write their fields with [`Archive::nvp`] inside
	/// [`Archive::record`].
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, version: u32) -> io::Result<()>;
}

/// Tagged markup writer.
///
/// Named values are rendered as `<name>value</name>` with no escaping of the
/// value text.
#[derive(Debug)]
pub struct Archive<W> {
	out: W,
}

impl<W: Write> Archive<W> {
	/// Wraps an output stream.
	pub fn new(out: W) -> Self {
		Self { out }
	}

	/// Returns the underlying stream.
	pub fn get_ref(&self) -> &W {
		&self.out
	}

	/// Unwraps the archive, returning the underlying stream.
	pub fn into_inner(self) -> W {
		self.out
	}

	/// Writes raw text.
	pub fn write_str(&mut self, text: &str) -> io::Result<()> {
		self.out.write_all(text.as_bytes())
	}

	/// Writes a value without a surrounding tag.
	pub fn value<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
		value.serialize(self, FORMAT_VERSION)
	}

	/// Writes `<name>value</name>`.
	pub fn nvp<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> io::Result<()> {
		write!(self.out, "<{name}>")?;
		self.value(value)?;
		write!(self.out, "</{name}>")
	}

	/// Writes `{tab}<name>value{tab}</name>`.
	pub fn nvp_tabbed<T: Serialize + ?Sized>(&mut self, name: &str, value: &T, tab: &str) -> io::Result<()> {
		write!(self.out, "{tab}<{name}>")?;
		self.value(value)?;
		write!(self.out, "{tab}</{name}>")
	}

	/// Writes a compound value and terminates it with a newline.
	pub fn record<F>(&mut self, fields: F) -> io::Result<()>
	where
		F: FnOnce(&mut Self) -> io::Result<()>,
	{
		fields(self)?;
		self.out.write_all(b"\n")
	}

	/// Flushes the underlying stream.
	pub fn flush(&mut self) -> io::Result<()> {
		self.out.flush()
	}
}

/// Writes a local binding as a named value, using the binding's name as tag.
///
/// `nvp!(ar, total)` is `ar.nvp("total", &total)`; `nvp!(ar, *total)` derefs
/// first.
#[macro_export]
macro_rules! nvp {
	($ar:expr, *$name:ident) => {
		$ar.nvp(stringify!($name), &*$name)
	};
	($ar:expr, $name:ident) => {
		$ar.nvp(stringify!($name), &$name)
	};
}

impl Serialize for f64 {
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, _version: u32) -> io::Result<()> {
		ar.write_str(&format_general(*self, FLOAT_PRECISION))
	}
}

impl Serialize for f32 {
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, _version: u32) -> io::Result<()> {
		ar.write_str(&format_general(f64::from(*self), FLOAT_PRECISION))
	}
}

macro_rules! serialize_display {
	($($ty:ty),+) => {
		$(
			impl Serialize for $ty {
				fn serialize<W: Write>(&self, ar: &mut Archive<W>, _version: u32) -> io::Result<()> {
					write!(ar.out, "{self}")
				}
			}
		)+
	};
}

serialize_display!(i32, i64, u32, u64, usize, str, String);

impl<T: Serialize + ?Sized> Serialize for &T {
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, version: u32) -> io::Result<()> {
		(**self).serialize(ar, version)
	}
}
