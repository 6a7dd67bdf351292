use std::ffi::CStr;
use std::fmt;
use std::str::Utf8Error;

/// A borrowed, null-terminated string used as a table key or value.
///
/// `CText` is a handle: its `PartialEq` compares the address of the underlying
/// buffer, so two buffers with the same characters are different under
/// [`NativeEq`](crate::NativeEq). Use [`ContentEq`](crate::ContentEq) to compare
/// by content.
#[derive(Clone, Copy)]
pub struct CText<'a>(&'a CStr);

impl<'a> CText<'a> {
	/// Wraps a C string. Usable in constant expressions, e.g. `CText::new(c"key")`.
	pub const fn new(text: &'a CStr) -> Self {
		Self(text)
	}

	/// Returns the wrapped C string.
	pub const fn as_c_str(&self) -> &'a CStr {
		self.0
	}

	/// Returns the content without the trailing nul.
	pub fn to_bytes(&self) -> &'a [u8] {
		self.0.to_bytes()
	}

	/// Returns the content as UTF-8.
	pub fn to_str(&self) -> Result<&'a str, Utf8Error> {
		self.0.to_str()
	}

	/// Start of the underlying buffer.
	pub const fn as_ptr(&self) -> *const std::ffi::c_char {
		self.0.as_ptr()
	}
}

impl PartialEq for CText<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.as_ptr(), other.as_ptr())
	}
}

impl Eq for CText<'_> {}

impl<'a> From<&'a CStr> for CText<'a> {
	fn from(text: &'a CStr) -> Self {
		Self::new(text)
	}
}

impl fmt::Debug for CText<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.0, f)
	}
}

impl fmt::Display for CText<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0.to_string_lossy(), f)
	}
}
