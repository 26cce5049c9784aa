//! Fixture configuration.
//!
//! Settings are read from the host application's configuration mapping
//! (a JSON object of option name to value) or from process environment
//! variables. Only two options are recognized: `FIXTURES_DIR` and
//! `DUMP_LIMIT`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{FixtureError, FixtureResult};

/// Configuration key for the base fixtures directory.
pub const FIXTURES_DIR_KEY: &str = "FIXTURES_DIR";

/// Configuration key for the default dump record limit.
pub const DUMP_LIMIT_KEY: &str = "DUMP_LIMIT";

/// Default number of records fetched by a dump when no limit is given.
pub const DEFAULT_DUMP_LIMIT: usize = 1000;

/// Default base directory for fixture files.
pub const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Settings governing fixture file placement and dump behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSettings {
	/// Base directory for dumped/loaded fixture files.
	pub fixtures_dir: PathBuf,

	/// Default record limit for dumps.
	pub dump_limit: usize,
}

impl Default for FixtureSettings {
	fn default() -> Self {
		Self {
			fixtures_dir: PathBuf::from(DEFAULT_FIXTURES_DIR),
			dump_limit: DEFAULT_DUMP_LIMIT,
		}
	}
}

impl FixtureSettings {
	/// Creates settings with the default fixtures directory and dump limit.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fixtures directory.
	pub fn with_fixtures_dir(mut self, dir: impl AsRef<Path>) -> Self {
		self.fixtures_dir = dir.as_ref().to_path_buf();
		self
	}

	/// Sets the default dump record limit.
	pub fn with_dump_limit(mut self, limit: usize) -> Self {
		self.dump_limit = limit;
		self
	}

	/// Builds settings from the host application's configuration mapping.
	///
	/// Unrecognized keys are ignored. `FIXTURES_DIR` must be a string and
	/// `DUMP_LIMIT` a positive integer.
	pub fn from_map(config: &Map<String, Value>) -> FixtureResult<Self> {
		let mut settings = Self::default();

		if let Some(value) = config.get(FIXTURES_DIR_KEY) {
			let dir = value.as_str().ok_or_else(|| FixtureError::ValidationError {
				field: FIXTURES_DIR_KEY.to_string(),
				message: format!("expected a string, got: {value}"),
			})?;
			settings.fixtures_dir = PathBuf::from(dir);
		}

		if let Some(value) = config.get(DUMP_LIMIT_KEY) {
			let limit = value
				.as_u64()
				.filter(|limit| *limit > 0)
				.ok_or_else(|| FixtureError::ValidationError {
					field: DUMP_LIMIT_KEY.to_string(),
					message: format!("expected a positive integer, got: {value}"),
				})?;
			settings.dump_limit = limit as usize;
		}

		Ok(settings)
	}

	/// Builds settings from process environment variables.
	pub fn from_env() -> FixtureResult<Self> {
		let mut settings = Self::default();

		if let Ok(dir) = std::env::var(FIXTURES_DIR_KEY) {
			settings.fixtures_dir = PathBuf::from(dir);
		}

		if let Ok(raw) = std::env::var(DUMP_LIMIT_KEY) {
			let limit = raw
				.parse::<usize>()
				.ok()
				.filter(|limit| *limit > 0)
				.ok_or_else(|| FixtureError::ValidationError {
					field: DUMP_LIMIT_KEY.to_string(),
					message: format!("expected a positive integer, got: {raw}"),
				})?;
			settings.dump_limit = limit;
		}

		Ok(settings)
	}
}
