//! Fixed-capacity lookup tables bound entirely at construction time.
//!
//! A [`StaticMap`] owns exactly `N` key/value pairs and answers queries with a
//! linear scan in ascending index order. Key and value comparison is delegated
//! to an [`Equality`] policy chosen per table, so tables keyed by borrowed
//! C strings can compare by content while plain value types keep their
//! native equality.
//!
//! ```
//! use consta_static_map::{CText, CStringMap, static_map};
//!
//! static UNITS: CStringMap<'static, 2> = static_map! {
//! 	CText::new(c"kb") => CText::new(c"1024"),
//! 	CText::new(c"mb") => CText::new(c"1048576"),
//! };
//!
//! assert_eq!(UNITS.get(&CText::new(c"kb")).unwrap().to_bytes(), b"1024");
//! assert!(!UNITS.contains_key(&CText::new(c"gb")));
//! ```

/// Equality policies used to compare keys and values.
pub mod eq;
/// Lookup failures.
pub mod error;
mod macros;
/// The fixed-size table itself.
pub mod map;
/// Borrowed null-terminated text.
pub mod text;

pub use eq::{ContentEq, Equality, NativeEq};
pub use error::{LookupError, Result};
pub use map::{CStringMap, StaticMap};
pub use text::CText;
