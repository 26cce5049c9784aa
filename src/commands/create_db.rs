//! create-db command implementation.

use crate::error::FixtureResult;
use crate::store::Store;

/// The create-db command: creates the full database schema.
///
/// Delegates directly to the store's schema-creation routine; takes no
/// arguments.
#[derive(Debug, Default)]
pub struct CreateDbCommand;

impl CreateDbCommand {
	/// Creates a new create-db command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"create-db"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Creates the full database schema"
	}

	/// Executes the command.
	pub async fn execute(&self, store: &dyn Store) -> FixtureResult<()> {
		store.create_schema().await
	}
}
