//! CLI surface for the fixture commands.
//!
//! Hosts embed [`FixtureCommand`] in their management CLI (or parse
//! [`FixtureCli`] directly) and dispatch through [`execute`], which
//! wires the parsed arguments to the command implementations and the
//! configured settings.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use super::create_db::CreateDbCommand;
use super::dump_fixture::{DumpFixtureArgs, DumpFixtureCommand, DumpFixtureOptions};
use super::load_fixture::{LoadFixtureArgs, LoadFixtureCommand, LoadFixtureOptions};
use crate::config::FixtureSettings;
use crate::error::FixtureResult;
use crate::store::Store;

/// Fixture management CLI.
#[derive(Debug, Parser)]
#[command(name = "seedbed")]
#[command(about = "Fixture management interface", long_about = None)]
pub struct FixtureCli {
	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: FixtureCommand,

	/// Verbosity level (can be repeated for more output).
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbosity: u8,
}

/// Fixture management subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum FixtureCommand {
	/// Install a fixture file in the database.
	LoadFixture {
		/// Fixture file to load.
		#[arg(value_name = "PATH")]
		path: PathBuf,
	},

	/// Export model records to a fixture file.
	DumpFixture {
		/// Model to dump (e.g. "app.User").
		#[arg(value_name = "MODEL_PATH")]
		model_path: String,

		/// Maximum number of records to dump.
		#[arg(long, value_name = "N")]
		limit: Option<usize>,
	},

	/// Create the full database schema.
	CreateDb,
}

/// Dispatches a parsed CLI invocation against the given store.
///
/// The fixtures directory and the default dump limit come from
/// `settings`; an explicit `--limit` overrides the configured default.
/// Mapping a returned error to a non-zero exit code is the host's
/// concern.
pub async fn execute(
	cli: FixtureCli,
	store: &dyn Store,
	settings: &FixtureSettings,
) -> FixtureResult<()> {
	debug!(command = ?cli.command, "executing fixture command");
	match cli.command {
		FixtureCommand::LoadFixture { path } => {
			LoadFixtureCommand::new()
				.execute(
					LoadFixtureArgs { path },
					LoadFixtureOptions::new().with_verbosity(cli.verbosity),
					store,
				)
				.await?;
			Ok(())
		}
		FixtureCommand::DumpFixture { model_path, limit } => {
			let options = DumpFixtureOptions::new()
				.with_limit(limit.unwrap_or(settings.dump_limit))
				.with_fixtures_dir(&settings.fixtures_dir)
				.with_verbosity(cli.verbosity);
			DumpFixtureCommand::new()
				.execute(DumpFixtureArgs { model_path }, options, store)
				.await?;
			Ok(())
		}
		FixtureCommand::CreateDb => CreateDbCommand::new().execute(store).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_load_fixture() {
		let cli = FixtureCli::try_parse_from(["seedbed", "load-fixture", "fixtures/user.json"])
			.unwrap();
		match cli.command {
			FixtureCommand::LoadFixture { path } => {
				assert_eq!(path, PathBuf::from("fixtures/user.json"));
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[rstest]
	fn test_parse_dump_fixture_with_limit() {
		let cli =
			FixtureCli::try_parse_from(["seedbed", "dump-fixture", "app.User", "--limit", "10"])
				.unwrap();
		match cli.command {
			FixtureCommand::DumpFixture { model_path, limit } => {
				assert_eq!(model_path, "app.User");
				assert_eq!(limit, Some(10));
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[rstest]
	fn test_parse_dump_fixture_default_limit() {
		let cli = FixtureCli::try_parse_from(["seedbed", "dump-fixture", "app.User"]).unwrap();
		match cli.command {
			FixtureCommand::DumpFixture { limit, .. } => assert_eq!(limit, None),
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[rstest]
	fn test_parse_create_db() {
		let cli = FixtureCli::try_parse_from(["seedbed", "create-db"]).unwrap();
		assert!(matches!(cli.command, FixtureCommand::CreateDb));
	}

	#[rstest]
	fn test_parse_rejects_missing_argument() {
		assert!(FixtureCli::try_parse_from(["seedbed", "load-fixture"]).is_err());
		assert!(FixtureCli::try_parse_from(["seedbed", "dump-fixture"]).is_err());
	}

	#[rstest]
	fn test_verbosity_count() {
		let cli = FixtureCli::try_parse_from(["seedbed", "-vv", "create-db"]).unwrap();
		assert_eq!(cli.verbosity, 2);
	}
}
