//! dump-fixture command implementation.

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_DUMP_LIMIT, DEFAULT_FIXTURES_DIR};
use crate::error::FixtureResult;
use crate::fixtures::{DumpResult, FixtureDumper, RecordEncoder};
use crate::store::Store;

/// Arguments for the dump-fixture command.
#[derive(Debug, Clone, Default)]
pub struct DumpFixtureArgs {
	/// Model path to dump (e.g. `"app.User"`).
	pub model_path: String,
}

/// Options for the dump-fixture command.
#[derive(Clone)]
pub struct DumpFixtureOptions {
	/// Maximum number of records to dump.
	pub limit: usize,

	/// Base directory for the output fixture file.
	pub fixtures_dir: PathBuf,

	/// Optional per-record serializer hook.
	pub encoder: Option<RecordEncoder>,

	/// Verbosity level.
	pub verbosity: u8,
}

impl Default for DumpFixtureOptions {
	fn default() -> Self {
		Self {
			limit: DEFAULT_DUMP_LIMIT,
			fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
			encoder: None,
			verbosity: 0,
		}
	}
}

impl DumpFixtureOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the record limit.
	pub fn with_limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Sets the fixtures directory.
	pub fn with_fixtures_dir(mut self, dir: impl AsRef<Path>) -> Self {
		self.fixtures_dir = dir.as_ref().to_path_buf();
		self
	}

	/// Sets the per-record serializer hook.
	pub fn with_encoder(mut self, encoder: RecordEncoder) -> Self {
		self.encoder = Some(encoder);
		self
	}

	/// Sets the verbosity level.
	pub fn with_verbosity(mut self, level: u8) -> Self {
		self.verbosity = level;
		self
	}
}

impl std::fmt::Debug for DumpFixtureOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DumpFixtureOptions")
			.field("limit", &self.limit)
			.field("fixtures_dir", &self.fixtures_dir)
			.field("encoder", &self.encoder.as_ref().map(|_| "<hook>"))
			.field("verbosity", &self.verbosity)
			.finish()
	}
}

/// The dump-fixture command: exports model records to a fixture file.
#[derive(Debug, Default)]
pub struct DumpFixtureCommand;

impl DumpFixtureCommand {
	/// Creates a new dump-fixture command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"dump-fixture"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Exports model records to a fixture file"
	}

	/// Returns the command help text.
	pub fn help(&self) -> &str {
		r#"
Usage: dump-fixture <MODEL_PATH> [--limit N]

Exports model records to a fixture file under the fixtures directory.

Arguments:
  MODEL_PATH    Model to dump (e.g. "app.User")

Options:
  --limit N     Maximum number of records to dump (default 1000)
"#
	}

	/// Executes the command.
	pub async fn execute(
		&self,
		args: DumpFixtureArgs,
		options: DumpFixtureOptions,
		store: &dyn Store,
	) -> FixtureResult<DumpResult> {
		let mut dumper = FixtureDumper::new().with_limit(options.limit);
		if let Some(encoder) = options.encoder.clone() {
			dumper = dumper.with_encoder(encoder);
		}

		let result = dumper
			.dump(store, &args.model_path, &options.fixtures_dir)
			.await?;

		if options.verbosity > 0 {
			println!(
				"Dumped {} record(s) to {}",
				result.records_dumped,
				result.path.display()
			);
		}
		Ok(result)
	}
}
