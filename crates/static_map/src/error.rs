use thiserror::Error;

/// Errors raised by strict table accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// No entry's key matched the queried key.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// `Debug` rendering of the key that was looked up.
		key: String,
	},
}

/// Result type for table lookups.
pub type Result<T> = std::result::Result<T, LookupError>;
