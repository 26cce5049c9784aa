//! Fixture file parsing.
//!
//! Fixture files are JSON. A file normally holds an array of groups; a
//! bare single group object is also accepted.

use std::path::Path;

use super::format::{FixtureDocument, FixtureGroup};
use crate::error::{FixtureError, FixtureResult};

/// Parser for JSON fixture files.
#[derive(Debug, Default)]
pub struct FixtureParser;

impl FixtureParser {
	/// Creates a new fixture parser.
	pub fn new() -> Self {
		Self
	}

	/// Parses and validates a fixture file.
	///
	/// # Errors
	///
	/// Returns an error if the file is missing, does not carry a `.json`
	/// extension, is not valid JSON, or contains a malformed group.
	pub fn parse_file(&self, path: &Path) -> FixtureResult<FixtureDocument> {
		let extension = path.extension().and_then(|ext| ext.to_str());
		if extension != Some("json") {
			return Err(FixtureError::UnsupportedExtension(
				extension.unwrap_or("(none)").to_string(),
			));
		}

		let content = std::fs::read_to_string(path).map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				FixtureError::FileNotFound(path.display().to_string())
			} else {
				FixtureError::Io(e)
			}
		})?;

		self.parse_str(&content)
	}

	/// Parses and validates fixture content.
	///
	/// Validation checks every group before anything is handed to a
	/// loader, so a malformed group aborts the whole document.
	pub fn parse_str(&self, content: &str) -> FixtureResult<FixtureDocument> {
		let value: serde_json::Value = serde_json::from_str(content)?;

		let groups = match value {
			serde_json::Value::Array(items) => {
				let mut groups = Vec::with_capacity(items.len());
				for (idx, item) in items.into_iter().enumerate() {
					let group: FixtureGroup = serde_json::from_value(item).map_err(|e| {
						FixtureError::ParseError(format!(
							"invalid fixture group at index {idx}: {e}"
						))
					})?;
					groups.push(group);
				}
				groups
			}
			serde_json::Value::Object(_) => {
				// Single group format
				vec![serde_json::from_value(value)?]
			}
			_ => {
				return Err(FixtureError::ParseError(
					"expected an array of fixture groups".to_string(),
				));
			}
		};

		let document = FixtureDocument::from_groups(groups);
		document.validate()?;
		Ok(document)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[rstest]
	fn test_parse_array_of_groups() {
		let parser = FixtureParser::new();
		let content = r#"[
            {
                "model": "app.User",
                "records": [{"id": 1, "name": "Ann"}, {"id": 2, "name": "Ben"}]
            },
            {
                "table": "widgets",
                "records": [{"id": 1}]
            }
        ]"#;

		let document = parser.parse_str(content).unwrap();
		assert_eq!(document.len(), 2);
		assert_eq!(document.record_count(), 3);
		assert_eq!(document.groups[0].model.as_deref(), Some("app.User"));
		assert_eq!(document.groups[1].table.as_deref(), Some("widgets"));
	}

	#[rstest]
	fn test_parse_single_group_object() {
		let parser = FixtureParser::new();
		let content = r#"{"model": "app.User", "records": []}"#;

		let document = parser.parse_str(content).unwrap();
		assert_eq!(document.len(), 1);
	}

	#[rstest]
	fn test_parse_rejects_group_without_source() {
		let parser = FixtureParser::new();
		let content = r#"[{"records": [{"id": 1}]}]"#;

		let result = parser.parse_str(content);
		assert!(matches!(result, Err(FixtureError::InvalidGroup(_))));
	}

	#[rstest]
	fn test_parse_rejects_scalar_document() {
		let parser = FixtureParser::new();
		let result = parser.parse_str("42");
		assert!(matches!(result, Err(FixtureError::ParseError(_))));
	}

	#[rstest]
	fn test_parse_reports_bad_group_index() {
		let parser = FixtureParser::new();
		let content = r#"[
            {"model": "app.User", "records": []},
            {"model": "app.User", "records": "not an array"}
        ]"#;

		let error = parser.parse_str(content).unwrap_err();
		assert!(error.to_string().contains("index 1"));
	}

	#[rstest]
	fn test_parse_file() {
		let parser = FixtureParser::new();
		let mut file = NamedTempFile::with_suffix(".json").unwrap();
		writeln!(
			file,
			r#"[{{"model": "app.User", "records": [{{"id": 1}}]}}]"#
		)
		.unwrap();

		let document = parser.parse_file(file.path()).unwrap();
		assert_eq!(document.record_count(), 1);
	}

	#[rstest]
	fn test_parse_file_not_found() {
		let parser = FixtureParser::new();
		let result = parser.parse_file(Path::new("/nonexistent/fixture.json"));
		assert!(matches!(result, Err(FixtureError::FileNotFound(_))));
	}

	#[rstest]
	fn test_parse_unsupported_extension() {
		let parser = FixtureParser::new();
		let result = parser.parse_file(Path::new("fixture.yaml"));
		assert!(matches!(result, Err(FixtureError::UnsupportedExtension(_))));
	}
}
