/// Duplicate uid found during strict construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate uid {uid:?}: positions {first} and {second}")]
pub struct DuplicateUid {
	/// The uid shared by both occurrences.
	pub uid: Box<str>,
	/// Position of the earlier occurrence.
	pub first: usize,
	/// Position of the later occurrence.
	pub second: usize,
}
