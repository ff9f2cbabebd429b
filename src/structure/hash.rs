//! Hasher selection for grouping tables and `distinct`.
//!
//! - default: `std`'s randomly seeded SipHash
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature: `ahash::RandomState` (ignored when `fxhash` is also enabled)

/// The [`BuildHasher`](std::hash::BuildHasher) used by [`GroupTable`](super::GroupTable)
/// and [`Distinct`](super::Distinct).
#[cfg(feature = "fxhash")]
pub type GroupHasher = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) used by [`GroupTable`](super::GroupTable)
/// and [`Distinct`](super::Distinct).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type GroupHasher = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) used by [`GroupTable`](super::GroupTable)
/// and [`Distinct`](super::Distinct).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type GroupHasher = std::collections::hash_map::RandomState;

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, GroupHasher>;
pub(crate) type HashSet<T> = std::collections::HashSet<T, GroupHasher>;
