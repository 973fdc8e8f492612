use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors produced while loading, validating, and rendering values.
///
/// Cycles and depth cutoffs are not errors; they render as markers.
#[derive(Debug, Error)]
pub enum InspectError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document was not valid JSON or did not match the schema.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Value payload does not agree with its tag.
	#[error("malformed value at {path}: {reason}")]
	Malformed {
		/// Node path of the offending value.
		path: String,
		/// What was wrong with it.
		reason: String,
	},
	/// NUL-terminated string had no terminator inside the scan bound.
	#[error("unterminated string at {path} (scanned {max_len} bytes)")]
	UnterminatedString {
		/// Node path of the string.
		path: String,
		/// Scan bound that was exhausted.
		max_len: usize,
	},
	/// Requested root address is not part of the snapshot.
	#[error("address not present in snapshot: #{address}")]
	UnknownAddress {
		/// Rendered address identity.
		address: String,
	},
	/// Document node could not be converted into a value.
	#[error("invalid document at {path}: {reason}")]
	InvalidDocument {
		/// Document path of the offending node.
		path: String,
		/// What was wrong with it.
		reason: String,
	},
	/// Two document nodes share one address.
	#[error("duplicate node address: #{address}")]
	DuplicateAddress {
		/// Rendered address identity.
		address: String,
	},
	/// Built-in fixture name was not recognized.
	#[error("unknown fixture: {name}")]
	UnknownFixture {
		/// User-provided fixture name.
		name: String,
	},
}
