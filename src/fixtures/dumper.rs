//! Fixture dumping from the store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use super::format::{FixtureDocument, FixtureGroup};
use super::serializer::{FixtureSerializer, snake_case};
use crate::config::DEFAULT_DUMP_LIMIT;
use crate::error::FixtureResult;
use crate::store::{Row, Store};

/// Hook applied to each row before it is written to the fixture file.
///
/// Store implementations whose rows carry values without a native JSON
/// representation (date/times, UUIDs) normalize them here; the default
/// is the identity.
pub type RecordEncoder = Arc<dyn Fn(Row) -> FixtureResult<Row> + Send + Sync>;

/// Statistics from a fixture dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpResult {
	/// Number of records written.
	pub records_dumped: usize,

	/// Path of the written fixture file.
	pub path: PathBuf,
}

/// Dumps model records from a store into a single-group fixture file.
///
/// The record limit and the per-record serializer hook are explicitly
/// configurable.
#[derive(Clone)]
pub struct FixtureDumper {
	limit: usize,
	encoder: Option<RecordEncoder>,
	serializer: FixtureSerializer,
}

impl FixtureDumper {
	/// Creates a dumper with the default record limit of 1000.
	pub fn new() -> Self {
		Self {
			limit: DEFAULT_DUMP_LIMIT,
			encoder: None,
			serializer: FixtureSerializer::new(),
		}
	}

	/// Sets the maximum number of records fetched.
	///
	/// Truncation is silent; no warning is raised when more records
	/// exist than the limit.
	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Sets the per-record encoder hook.
	pub fn with_encoder(mut self, encoder: RecordEncoder) -> Self {
		self.encoder = Some(encoder);
		self
	}

	/// Sets the document serializer.
	pub fn with_serializer(mut self, serializer: FixtureSerializer) -> Self {
		self.serializer = serializer;
		self
	}

	/// Returns the configured record limit.
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Dumps up to `limit` records of `model_path` to
	/// `<fixtures_dir>/<snake_case(type_name)>.json`, overwriting any
	/// existing file of that name. The directory is created if absent.
	pub async fn dump(
		&self,
		store: &dyn Store,
		model_path: &str,
		fixtures_dir: &Path,
	) -> FixtureResult<DumpResult> {
		let rows = store.select(model_path, self.limit).await?;
		let records = match &self.encoder {
			Some(encoder) => rows
				.into_iter()
				.map(|row| encoder(row))
				.collect::<FixtureResult<Vec<Row>>>()?,
			None => rows,
		};
		let records_dumped = records.len();

		let document =
			FixtureDocument::from_groups(vec![FixtureGroup::for_model(model_path, records)]);

		let type_name = model_path.rsplit('.').next().unwrap_or(model_path);
		std::fs::create_dir_all(fixtures_dir)?;
		let path = fixtures_dir.join(format!("{}.json", snake_case(type_name)));
		self.serializer.write_to_file(&document, &path)?;

		info!(
			model = model_path,
			records = records_dumped,
			path = %path.display(),
			"fixture dumped"
		);
		Ok(DumpResult {
			records_dumped,
			path,
		})
	}
}

impl Default for FixtureDumper {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for FixtureDumper {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FixtureDumper")
			.field("limit", &self.limit)
			.field("encoder", &self.encoder.as_ref().map(|_| "<hook>"))
			.finish()
	}
}
