use std::ffi::{CStr, CString};

use crate::text::CText;

/// A pure, stateless comparison between two values of the same type.
///
/// Implementations must be reflexive and symmetric and must not depend on any
/// state other than the two operands. Policies are zero-sized marker types and
/// are selected through a table's type parameters rather than stored in it.
pub trait Equality<T: ?Sized> {
	/// Returns true if `lhs` and `rhs` are considered the same.
	fn equals(lhs: &T, rhs: &T) -> bool;
}

/// Native equality: whatever `PartialEq` says.
///
/// For handle types such as [`CText`] this compares identity, not content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeEq;

impl<T: PartialEq + ?Sized> Equality<T> for NativeEq {
	#[inline]
	fn equals(lhs: &T, rhs: &T) -> bool {
		lhs == rhs
	}
}

/// Content equality for text-like types.
///
/// Two distinct buffers holding the same characters compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ContentEq;

impl Equality<CText<'_>> for ContentEq {
	#[inline]
	fn equals(lhs: &CText<'_>, rhs: &CText<'_>) -> bool {
		lhs.to_bytes() == rhs.to_bytes()
	}
}

impl Equality<&CStr> for ContentEq {
	#[inline]
	fn equals(lhs: &&CStr, rhs: &&CStr) -> bool {
		lhs.to_bytes() == rhs.to_bytes()
	}
}

impl Equality<CString> for ContentEq {
	#[inline]
	fn equals(lhs: &CString, rhs: &CString) -> bool {
		lhs.as_bytes() == rhs.as_bytes()
	}
}

impl Equality<&str> for ContentEq {
	#[inline]
	fn equals(lhs: &&str, rhs: &&str) -> bool {
		lhs.as_bytes() == rhs.as_bytes()
	}
}

impl Equality<String> for ContentEq {
	#[inline]
	fn equals(lhs: &String, rhs: &String) -> bool {
		lhs.as_bytes() == rhs.as_bytes()
	}
}
