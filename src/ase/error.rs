use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AseError>;

/// Errors produced while processing user data property maps.
#[derive(Debug, Error)]
pub enum AseError {
	/// A document element was handed to an entry point without user data.
	#[error("missing user data on {element}")]
	MissingUserData {
		/// Document element kind the caller supplied.
		element: &'static str,
	},
	/// Positional lookup outside the entry range.
	#[error("property index out of range: idx={index}, len={len}")]
	IndexOutOfRange {
		/// Offending index value.
		index: usize,
		/// Number of entries available.
		len: usize,
	},
	/// Processing recursion depth exceeded configured limit.
	#[error("process depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}
