//! load-fixture command implementation.

use std::path::PathBuf;

use crate::error::{FixtureError, FixtureResult};
use crate::fixtures::{FixtureLoader, LoadResult};
use crate::store::Store;

/// Arguments for the load-fixture command.
#[derive(Debug, Clone, Default)]
pub struct LoadFixtureArgs {
	/// Fixture file to load.
	pub path: PathBuf,
}

/// Options for the load-fixture command.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadFixtureOptions {
	/// Verbosity level.
	pub verbosity: u8,
}

impl LoadFixtureOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the verbosity level.
	pub fn with_verbosity(mut self, level: u8) -> Self {
		self.verbosity = level;
		self
	}
}

/// The load-fixture command: installs a fixture file in the database.
///
/// # Example
///
/// ```ignore
/// let command = LoadFixtureCommand::new();
/// let args = LoadFixtureArgs {
///     path: PathBuf::from("fixtures/user.json"),
/// };
/// let result = command.execute(args, LoadFixtureOptions::new(), &store).await?;
/// println!("Installed {} record(s)", result.records_loaded);
/// ```
#[derive(Debug, Default)]
pub struct LoadFixtureCommand;

impl LoadFixtureCommand {
	/// Creates a new load-fixture command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"load-fixture"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Installs the given fixture file in the database"
	}

	/// Returns the command help text.
	pub fn help(&self) -> &str {
		r#"
Usage: load-fixture <PATH>

Installs the given fixture file in the database.

Arguments:
  PATH    Fixture file to load
"#
	}

	/// Executes the command: parses the fixture file and loads it.
	pub async fn execute(
		&self,
		args: LoadFixtureArgs,
		options: LoadFixtureOptions,
		store: &dyn Store,
	) -> FixtureResult<LoadResult> {
		if !args.path.exists() {
			return Err(FixtureError::FileNotFound(args.path.display().to_string()));
		}

		let result = FixtureLoader::new().load_path(&args.path, store).await?;

		if options.verbosity > 0 {
			println!("Installed {} record(s)", result.records_loaded);
		}
		Ok(result)
	}
}
