use std::fmt;
use std::marker::PhantomData;

use crate::eq::{ContentEq, Equality, NativeEq};
use crate::error::{LookupError, Result};
use crate::text::CText;


/// A fixed-size, immutable table of `N` key/value pairs.
///
/// Keys need not be unique. Every query scans positions `0..N` in ascending
/// order and stops at the first key accepted by `KE`, so among duplicate keys
/// the lowest index wins for all operations.
///
/// `KE` and `VE` are the key and value [`Equality`] policies. They are
/// stateless and only appear in the type.
pub struct StaticMap<K, V, const N: usize, KE = NativeEq, VE = NativeEq> {
	entries: [(K, V); N],
	policy: PhantomData<fn() -> (KE, VE)>,
}

/// A table keyed and valued by borrowed C strings, compared by content.
pub type CStringMap<'a, const N: usize> = StaticMap<CText<'a>, CText<'a>, N, ContentEq, ContentEq>;

impl<K, V, const N: usize, KE, VE> StaticMap<K, V, N, KE, VE> {
	/// Builds a table from exactly `N` pairs.
	///
	/// Evaluable in constant context, so tables can live in `static` items.
	/// A zero-capacity table fails to compile.
	pub const fn new(entries: [(K, V); N]) -> Self {
		const { assert!(N > 0, "StaticMap requires at least one entry") };
		Self {
			entries,
			policy: PhantomData,
		}
	}

	/// Number of pairs, always `N`.
	#[inline]
	pub const fn len(&self) -> usize {
		N
	}

	/// Always false; a table holds at least one pair.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		N == 0
	}

	/// The pairs in scan order.
	#[inline]
	pub const fn entries(&self) -> &[(K, V); N] {
		&self.entries
	}

	/// Iterates pairs in scan order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	/// Iterates keys in scan order, duplicates included.
	pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
		self.entries.iter().map(|(k, _)| k)
	}

	/// Iterates values in scan order.
	pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
		self.entries.iter().map(|(_, v)| v)
	}
}

impl<K, V, const N: usize, KE, VE> StaticMap<K, V, N, KE, VE>
where
	KE: Equality<K>,
{
	/// Index of the first pair whose key matches `key`.
	#[inline]
	pub fn position(&self, key: &K) -> Option<usize> {
		self.entries.iter().position(|(k, _)| KE::equals(k, key))
	}

	/// Value of the first matching pair, if any.
	#[inline]
	pub fn lookup(&self, key: &K) -> Option<&V> {
		self.position(key).map(|i| &self.entries[i].1)
	}

	/// Value of the first matching pair.
	///
	/// Use this when the key's presence is already established; a miss is
	/// reported as [`LookupError::KeyNotFound`].
	pub fn get(&self, key: &K) -> Result<&V>
	where
		K: fmt::Debug,
	{
		self.lookup(key).ok_or_else(|| LookupError::KeyNotFound { key: format!("{key:?}") })
	}

	/// Value of the first matching pair, or `default` on a miss.
	#[inline]
	pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
		self.lookup(key).unwrap_or(default)
	}

	/// True if some pair's key matches `key`.
	#[inline]
	pub fn contains_key(&self, key: &K) -> bool {
		self.position(key).is_some()
	}

	/// True if the first pair matching `key` holds a value equal to `value`.
	///
	/// Only the first matching position is inspected. A later duplicate key
	/// paired with `value` does not make this true.
	pub fn contains_entry(&self, key: &K, value: &V) -> bool
	where
		VE: Equality<V>,
	{
		self.lookup(key).is_some_and(|found| VE::equals(found, value))
	}
}

impl<K, V, const N: usize, KE, VE> From<[(K, V); N]> for StaticMap<K, V, N, KE, VE> {
	fn from(entries: [(K, V); N]) -> Self {
		Self::new(entries)
	}
}

impl<'m, K, V, const N: usize, KE, VE> IntoIterator for &'m StaticMap<K, V, N, KE, VE> {
	type Item = &'m (K, V);
	type IntoIter = std::slice::Iter<'m, (K, V)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K: Clone, V: Clone, const N: usize, KE, VE> Clone for StaticMap<K, V, N, KE, VE> {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
			policy: PhantomData,
		}
	}
}

impl<K: Copy, V: Copy, const N: usize, KE, VE> Copy for StaticMap<K, V, N, KE, VE> {}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize, KE, VE> fmt::Debug for StaticMap<K, V, N, KE, VE> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
