//! Immutable order-preserving container indexed by uid.
//!
//! # Role
//!
//! This module provides the read-only view a timeline renders from: a fixed
//! sequence of items plus a uid lookup table built in the same pass. It
//! contains no mutation logic; an updated timeline is a new container.
//!
//! # Invariants
//!
//! - `items` is never touched after construction.
//! - Every `(uid, pos)` entry in `by_uid` satisfies `items[pos].uid() == uid`.
//! - `by_uid` holds exactly one entry per distinct uid in `items`; when the
//!   input repeats a uid, the last occurrence owns the mapping and earlier
//!   ones stay reachable by position only.

mod error;
mod iter;


pub use error::DuplicateUid;
pub use iter::Iter;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::Identifiable;

/// Ordered collection with O(1) access by position and by uid.
///
/// The lookup table stores positions into the shared item table rather than
/// items themselves, so elements are owned exactly once. Cloning bumps two
/// reference counts and never copies elements.
pub struct OrderedUniqueIndex<T> {
	items: Arc<[T]>,
	by_uid: Arc<FxHashMap<Box<str>, usize>>,
}

impl<T: Identifiable> OrderedUniqueIndex<T> {
	/// Builds a container from a sequence, preserving its order exactly.
	///
	/// Construction cannot fail. A repeated uid is resolved in favor of the
	/// later occurrence (logged at debug level); use
	/// [`from_items_strict`](Self::from_items_strict) to reject it instead.
	pub fn from_items<I>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		let items: Vec<T> = items.into_iter().collect();
		let mut by_uid: FxHashMap<Box<str>, usize> =
			FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
		for (pos, item) in items.iter().enumerate() {
			if let Some(prev) = by_uid.insert(Box::from(item.uid()), pos) {
				tracing::debug!(
					"duplicate uid {:?}: position {} replaces {} in the lookup table",
					item.uid(),
					pos,
					prev
				);
			}
		}
		Self {
			items: items.into(),
			by_uid: Arc::new(by_uid),
		}
	}

	/// Builds a container from a sequence, rejecting duplicate uids.
	pub fn from_items_strict<I>(items: I) -> Result<Self, DuplicateUid>
	where
		I: IntoIterator<Item = T>,
	{
		let items: Vec<T> = items.into_iter().collect();
		let mut by_uid: FxHashMap<Box<str>, usize> =
			FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
		for (pos, item) in items.iter().enumerate() {
			if let Some(prev) = by_uid.insert(Box::from(item.uid()), pos) {
				return Err(DuplicateUid {
					uid: Box::from(item.uid()),
					first: prev,
					second: pos,
				});
			}
		}
		Ok(Self {
			items: items.into(),
			by_uid: Arc::new(by_uid),
		})
	}
}

impl<T> OrderedUniqueIndex<T> {
	/// Returns the item at `pos`, or `None` when out of range.
	#[inline]
	pub fn get(&self, pos: usize) -> Option<&T> {
		self.items.get(pos)
	}

	/// Looks up an item by uid.
	///
	/// O(1): one map probe, one positional dereference. An unknown uid is an
	/// expected outcome, not an error.
	#[inline]
	pub fn by_uid(&self, uid: &str) -> Option<&T> {
		let pos = *self.by_uid.get(uid)?;
		Some(&self.items[pos])
	}

	/// Returns the position an uid resolves to, if any.
	#[inline]
	pub fn position_of(&self, uid: &str) -> Option<usize> {
		self.by_uid.get(uid).copied()
	}

	/// Returns true if any item resolves from `uid`.
	#[inline]
	pub fn contains_uid(&self, uid: &str) -> bool {
		self.by_uid.contains_key(uid)
	}

	/// Returns all items in positional order.
	#[inline]
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Returns an iterator over the items in positional order.
	///
	/// Each call starts a fresh traversal from position zero.
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter::new(&self.items)
	}

	/// Returns the first item in positional order.
	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.items.first()
	}

	/// Returns the last item in positional order.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.items.last()
	}

	/// Returns the number of stored items.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the container holds no items.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl<T> std::ops::Index<usize> for OrderedUniqueIndex<T> {
	type Output = T;

	/// Positional access. Out-of-range positions are a caller contract
	/// violation and panic with the standard slice bounds message.
	#[inline]
	fn index(&self, pos: usize) -> &T {
		&self.items[pos]
	}
}

// Not derived: a derive would demand `T: Clone`, but only the Arcs are cloned.
impl<T> Clone for OrderedUniqueIndex<T> {
	fn clone(&self) -> Self {
		Self {
			items: self.items.clone(),
			by_uid: self.by_uid.clone(),
		}
	}
}

impl<T> Default for OrderedUniqueIndex<T> {
	fn default() -> Self {
		Self {
			items: Vec::new().into(),
			by_uid: Arc::new(FxHashMap::default()),
		}
	}
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedUniqueIndex<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.items.iter()).finish()
	}
}

// The lookup table is derived data, so item order and content decide equality.
impl<T: PartialEq> PartialEq for OrderedUniqueIndex<T> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<T: Eq> Eq for OrderedUniqueIndex<T> {}
