use std::rc::Rc;
use std::sync::Arc;

/// Contract for values addressable by a stable string identifier.
///
/// Uniqueness is scoped to one container and is the producer's responsibility;
/// see [`crate::OrderedUniqueIndex`] for how duplicates are resolved.
pub trait Identifiable {
	/// Returns the identifier, stable for the lifetime of the value.
	fn uid(&self) -> &str;
}

impl<'a, T: Identifiable + ?Sized> Identifiable for &'a T {
	fn uid(&self) -> &str {
		(**self).uid()
	}
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
	fn uid(&self) -> &str {
		(**self).uid()
	}
}

impl<T: Identifiable + ?Sized> Identifiable for Rc<T> {
	fn uid(&self) -> &str {
		(**self).uid()
	}
}

impl<T: Identifiable + ?Sized> Identifiable for Arc<T> {
	fn uid(&self) -> &str {
		(**self).uid()
	}
}
