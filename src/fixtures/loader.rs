//! Fixture loading into the store.

use std::path::Path;

use tracing::{debug, info};

use super::format::{FixtureDocument, GroupSource};
use super::parser::FixtureParser;
use super::registry::FixtureRegistry;
use crate::error::{FixtureError, FixtureResult};
use crate::store::Store;

/// Statistics from a fixture load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadResult {
	/// Total records installed.
	pub records_loaded: usize,

	/// Groups processed.
	pub groups_loaded: usize,
}

/// Loads fixture documents into a store.
///
/// Model groups resolve through the fixture registry, stage one record
/// at a time, and commit once per group. Table groups bypass record
/// construction with a single bulk insert. Every failure aborts the
/// load; there are no retries and no partial-success reporting.
#[derive(Debug, Default)]
pub struct FixtureLoader {
	registry: FixtureRegistry,
}

impl FixtureLoader {
	/// Creates a new fixture loader.
	pub fn new() -> Self {
		Self {
			registry: FixtureRegistry::new(),
		}
	}

	/// Loads a parsed fixture document.
	///
	/// The document is validated in full before any store traffic, so a
	/// malformed group anywhere means nothing from any group is
	/// persisted. A group's records commit together; a failure partway
	/// through a later group leaves earlier groups committed.
	pub async fn load(
		&self,
		document: &FixtureDocument,
		store: &dyn Store,
	) -> FixtureResult<LoadResult> {
		document.validate()?;

		let mut result = LoadResult::default();
		for group in document {
			match group.source()? {
				GroupSource::Model(model_path) => {
					let binding = self
						.registry
						.get(model_path)
						.ok_or_else(|| FixtureError::ModelNotFound(model_path.to_string()))?;
					for row in &group.records {
						let canonical = binding.construct(row)?;
						store.stage(model_path, canonical).await?;
					}
					store.commit().await?;
					debug!(
						model = model_path,
						records = group.len(),
						"loaded model fixture group"
					);
				}
				GroupSource::Table(table) => {
					let inserted = store.insert_rows(table, &group.records).await?;
					debug!(table, rows = inserted, "inserted table fixture group");
				}
			}
			result.records_loaded += group.len();
			result.groups_loaded += 1;
		}

		info!(
			records = result.records_loaded,
			groups = result.groups_loaded,
			"fixtures loaded"
		);
		Ok(result)
	}

	/// Parses a fixture file and loads it.
	pub async fn load_path(&self, path: &Path, store: &dyn Store) -> FixtureResult<LoadResult> {
		let document = FixtureParser::new().parse_file(path)?;
		self.load(&document, store).await
	}
}
