use super::OrderedUniqueIndex;
use crate::Identifiable;

/// External iterator over an [`OrderedUniqueIndex`] in positional order.
///
/// Finite, side-effect free, and fused; the traversal matches
/// `index[0], index[1], ..` exactly.
#[derive(Debug)]
pub struct Iter<'a, T> {
	inner: std::slice::Iter<'a, T>,
}

// Not derived: slice iterators clone without `T: Clone`.
impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<'a, T> Iter<'a, T> {
	pub(super) fn new(items: &'a [T]) -> Self {
		Self {
			inner: items.iter(),
		}
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.inner.next()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedUniqueIndex<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Iter<'a, T> {
		self.iter()
	}
}

impl<T: Identifiable> FromIterator<T> for OrderedUniqueIndex<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from_items(iter)
	}
}
