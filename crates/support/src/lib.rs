//! Host-side support for programs built around static lookup tables: run
//! options, tagged markup output and a quoted display string.

/// Errors for option loading.
pub mod error;
/// Execution parameters for a host run.
pub mod opts;
/// Tagged markup serialization.
pub mod serialize;
/// Shared immutable strings.
pub mod text;

pub use error::{OptsError, Result};
pub use opts::RuntimeOpts;
pub use serialize::{Archive, FORMAT_VERSION, Serialize};
pub use text::Text;
