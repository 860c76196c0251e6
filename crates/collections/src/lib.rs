//! Ordered, uid-addressable collections for chat timelines.
//!
//! A timeline needs two access paths over the same data: iterate messages in
//! display order, and resolve "the message with this uid" without scanning.
//! [`OrderedUniqueIndex`] serves both in O(1) and is immutable once built;
//! an updated timeline is a new container built from the new sequence.

/// Capability contract for uid-carrying values.
pub mod identify;
/// The order-preserving, uid-indexed container.
pub mod index;

pub use identify::Identifiable;
pub use index::{DuplicateUid, Iter, OrderedUniqueIndex};
