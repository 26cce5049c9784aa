//! Error types for fixture operations.
//!
//! This module defines the error types used throughout the seedbed crate.

use thiserror::Error;

/// Errors that can occur during fixture operations.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// Fixture group is malformed (missing or ambiguous `model`/`table` key).
	///
	/// The message carries the serialized offending group.
	#[error("Invalid fixture group: {0}")]
	InvalidGroup(String),

	/// Model path was not found in the fixture registry.
	#[error("Model not found: {0}")]
	ModelNotFound(String),

	/// Error parsing fixture data.
	#[error("Parse error: {0}")]
	ParseError(String),

	/// Validation failed for a specific field.
	#[error("Validation error: {field}: {message}")]
	ValidationError {
		/// Field that failed validation.
		field: String,
		/// Validation error message.
		message: String,
	},

	/// Error converting between fixture rows and typed records.
	#[error("Serialization error: {0}")]
	SerializationError(String),

	/// A record lookup by primary key returned nothing.
	#[error("Record not found: {model} pk={pk}")]
	NotFound {
		/// Model path the lookup ran against.
		model: String,
		/// Primary key that failed to resolve.
		pk: serde_json::Value,
	},

	/// Storage-layer operation failed.
	#[error("Database error: {0}")]
	Database(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// Fixture file not found.
	#[error("Fixture file not found: {0}")]
	FileNotFound(String),

	/// Unsupported fixture file extension.
	#[error("Unsupported file extension: {0}")]
	UnsupportedExtension(String),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
