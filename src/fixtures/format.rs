//! Fixture document format definitions.
//!
//! The on-disk contract: a JSON array of fixture groups, each group an
//! object with a `model` or `table` key and a `records` array of flat
//! field mappings.

use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, FixtureResult};
use crate::store::Row;

/// One fixture group: a set of records for a single model or table.
///
/// Exactly one of `model` / `table` must be set. Absence of both (or
/// presence of both) is a fatal input error.
///
/// # Example
///
/// ```json
/// {
///   "model": "app.User",
///   "records": [
///     {"id": 1, "name": "Ann"}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureGroup {
	/// Model path in `app.Type` format, for registry-backed loading.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,

	/// Raw table name, for bulk-insert loading.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub table: Option<String>,

	/// Flat record mappings.
	pub records: Vec<Row>,
}

impl FixtureGroup {
	/// Creates a model-mode group.
	pub fn for_model(model: impl Into<String>, records: Vec<Row>) -> Self {
		Self {
			model: Some(model.into()),
			table: None,
			records,
		}
	}

	/// Creates a table-mode group.
	pub fn for_table(table: impl Into<String>, records: Vec<Row>) -> Self {
		Self {
			model: None,
			table: Some(table.into()),
			records,
		}
	}

	/// Resolves which loading path this group takes.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InvalidGroup`] naming the offending group
	/// when neither or both of `model`/`table` are present.
	pub fn source(&self) -> FixtureResult<GroupSource<'_>> {
		match (self.model.as_deref(), self.table.as_deref()) {
			(Some(model), None) => Ok(GroupSource::Model(model)),
			(None, Some(table)) => Ok(GroupSource::Table(table)),
			(None, None) => Err(FixtureError::InvalidGroup(format!(
				"missing a 'model' or 'table' field: {}",
				self.describe()
			))),
			(Some(_), Some(_)) => Err(FixtureError::InvalidGroup(format!(
				"has both 'model' and 'table' fields: {}",
				self.describe()
			))),
		}
	}

	/// Returns the number of records in this group.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if the group carries no records.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	fn describe(&self) -> String {
		serde_json::to_string(self).unwrap_or_else(|_| "<unserializable group>".to_string())
	}
}

/// Loading path resolved for a fixture group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource<'a> {
	/// Construct typed records via the registered model binding.
	Model(&'a str),

	/// Bulk-insert raw rows into the named table.
	Table(&'a str),
}

/// A parsed fixture document: an ordered collection of groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FixtureDocument {
	/// Fixture groups in document order.
	pub groups: Vec<FixtureGroup>,
}

impl FixtureDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a document from a vector of groups.
	pub fn from_groups(groups: Vec<FixtureGroup>) -> Self {
		Self { groups }
	}

	/// Adds a group to the document.
	pub fn push(&mut self, group: FixtureGroup) {
		self.groups.push(group);
	}

	/// Returns the number of groups.
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Returns true if the document has no groups.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	/// Returns the total record count across all groups.
	pub fn record_count(&self) -> usize {
		self.groups.iter().map(FixtureGroup::len).sum()
	}

	/// Checks every group up front.
	///
	/// Loading validates the whole document before touching the store,
	/// so a malformed group anywhere means not a single record from any
	/// group is persisted.
	pub fn validate(&self) -> FixtureResult<()> {
		for group in &self.groups {
			group.source()?;
		}
		Ok(())
	}

	/// Returns an iterator over the groups.
	pub fn iter(&self) -> impl Iterator<Item = &FixtureGroup> {
		self.groups.iter()
	}
}

impl IntoIterator for FixtureDocument {
	type Item = FixtureGroup;
	type IntoIter = std::vec::IntoIter<FixtureGroup>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.into_iter()
	}
}

impl<'a> IntoIterator for &'a FixtureDocument {
	type Item = &'a FixtureGroup;
	type IntoIter = std::slice::Iter<'a, FixtureGroup>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.iter()
	}
}
