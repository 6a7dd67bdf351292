//! Error types for runtime option handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing run options.
#[derive(Debug, Error)]
pub enum OptsError {
	/// Error reading an options file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The options document is not valid TOML or has unexpected fields.
	#[error("invalid options: {0}")]
	Parse(#[from] toml::de::Error),

	/// The options could not be rendered as TOML.
	#[error("failed to render options: {0}")]
	Render(#[from] toml::ser::Error),
}

/// Result type for option operations.
pub type Result<T> = std::result::Result<T, OptsError>;
