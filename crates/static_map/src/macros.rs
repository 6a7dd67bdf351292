/// Builds a [`StaticMap`](crate::StaticMap) from `key => value` pairs.
///
/// The capacity is the number of pairs. Policies come from the annotated
/// target type, so the macro works in `static` and `const` items:
///
/// ```
/// use consta_static_map::{StaticMap, static_map};
///
/// const PRECEDENCE: StaticMap<char, u8, 3> = static_map! {
/// 	'+' => 1,
/// 	'*' => 2,
/// 	'^' => 3,
/// };
///
/// assert_eq!(PRECEDENCE.get(&'*'), Ok(&2));
/// ```
#[macro_export]
macro_rules! static_map {
	($($key:expr => $value:expr),+ $(,)?) => {
		$crate::StaticMap::new([$(($key, $value)),+])
	};
}
