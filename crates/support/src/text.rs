use std::borrow::Borrow;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::serialize::{Archive, Serialize};

/// An immutable, cheaply cloned string.
///
/// Equality, ordering and hashing follow the content. `Display` wraps the
/// content in double quotes; serialization writes it bare.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(Arc<str>);

impl Text {
	/// Creates a text from anything string-like.
	pub fn new(content: impl Into<Arc<str>>) -> Self {
		Self(content.into())
	}

	/// Returns the content.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Content length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the content is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for Text {
	fn from(content: &str) -> Self {
		Self::new(content)
	}
}

impl From<String> for Text {
	fn from(content: String) -> Self {
		Self::new(content)
	}
}

impl AsRef<str> for Text {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl Borrow<str> for Text {
	fn borrow(&self) -> &str {
		self.as_str()
	}
}

impl fmt::Display for Text {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\"{}\"", self.0)
	}
}

impl Serialize for Text {
	fn serialize<W: Write>(&self, ar: &mut Archive<W>, _version: u32) -> io::Result<()> {
		ar.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn display_quotes_content() {
		assert_eq!(Text::from("BUILDING").to_string(), "\"BUILDING\"");
		assert_eq!(format!("{}", Text::from("")), "\"\"");
	}

	#[test]
	fn equality_follows_content() {
		let a = Text::from("MACHINERY");
		let b = Text::from(String::from("MACHINERY"));
		assert_eq!(a, b);
		assert!(Text::from("A") < Text::from("B"));

		let set: HashSet<Text> = [a.clone(), b].into_iter().collect();
		assert_eq!(set.len(), 1);
		assert!(set.contains("MACHINERY"));
	}

	#[test]
	fn clones_share_storage() {
		let a = Text::from("HOUSEHOLD");
		let b = a.clone();
		assert!(std::ptr::eq(a.as_str(), b.as_str()));
		assert_eq!(b.len(), 9);
		assert!(!b.is_empty());
	}
}
