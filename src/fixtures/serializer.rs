//! Fixture document serialization and value encoding helpers.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::format::FixtureDocument;
use crate::error::{FixtureError, FixtureResult};

/// Serializer for writing fixture documents to JSON.
#[derive(Debug, Clone)]
pub struct FixtureSerializer {
	/// Indentation level; zero writes compact output.
	indent: usize,
}

impl FixtureSerializer {
	/// Creates a serializer with pretty-printed output.
	pub fn new() -> Self {
		Self { indent: 2 }
	}

	/// Sets the indentation level (zero for compact output).
	pub fn with_indent(mut self, indent: usize) -> Self {
		self.indent = indent;
		self
	}

	/// Serializes a fixture document to a JSON string.
	pub fn serialize(&self, document: &FixtureDocument) -> FixtureResult<String> {
		if self.indent > 0 {
			serde_json::to_string_pretty(document)
				.map_err(|e| FixtureError::SerializationError(e.to_string()))
		} else {
			serde_json::to_string(document)
				.map_err(|e| FixtureError::SerializationError(e.to_string()))
		}
	}

	/// Writes a serialized fixture document to a file, overwriting any
	/// existing file at that path.
	pub fn write_to_file(&self, document: &FixtureDocument, path: &Path) -> FixtureResult<()> {
		let content = self.serialize(document)?;
		std::fs::write(path, content)?;
		Ok(())
	}

	/// Returns the configured indentation level.
	pub fn indent(&self) -> usize {
		self.indent
	}
}

impl Default for FixtureSerializer {
	fn default() -> Self {
		Self::new()
	}
}

/// Encodes a date/time value as an ISO-8601 string.
///
/// Raw JSON has no date/time representation; store implementations use
/// this when materializing rows from native column values. Typed models
/// get the same encoding through chrono's serde support.
pub fn encode_datetime(value: &DateTime<Utc>) -> Value {
	Value::String(value.to_rfc3339())
}

/// Encodes a unique identifier as a plain string.
pub fn encode_uuid(value: &Uuid) -> Value {
	Value::String(value.to_string())
}

/// Derives a snake_case fixture file name from a type name.
///
/// `AdminUser` becomes `admin_user`; acronym runs keep a single
/// underscore (`HTTPServer` becomes `http_server`).
pub fn snake_case(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut out = String::with_capacity(name.len() + 4);
	for (idx, ch) in chars.iter().enumerate() {
		if ch.is_uppercase() {
			let after_lower =
				idx > 0 && (chars[idx - 1].is_lowercase() || chars[idx - 1].is_ascii_digit());
			let before_lower = idx > 0
				&& chars[idx - 1].is_uppercase()
				&& chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
			if after_lower || before_lower {
				out.push('_');
			}
			out.extend(ch.to_lowercase());
		} else {
			out.push(*ch);
		}
	}
	out
}
