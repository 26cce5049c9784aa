//! Store trait: the seam to the external ORM session.
//!
//! The underlying session/transaction machinery is owned by the host
//! application; this crate only requires the narrow surface defined
//! here. All row traffic is carried as flat JSON mappings. Access is
//! assumed to be exclusive and sequential within a single command
//! invocation; no locking discipline is implemented on this side.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FixtureResult;

/// A flat record mapping of column/field name to JSON value.
pub type Row = serde_json::Map<String, Value>;

/// Handle to the persistent store consumed by fixture operations.
#[async_trait]
pub trait Store: Send + Sync {
	/// Stages one record of `model` for insertion in the current session.
	async fn stage(&self, model: &str, row: Row) -> FixtureResult<()>;

	/// Commits everything staged so far.
	///
	/// Records staged for a group commit together; there is no atomicity
	/// guarantee beyond what this single call provides.
	async fn commit(&self) -> FixtureResult<()>;

	/// Looks up one record of `model` by primary key.
	async fn get(&self, model: &str, pk: &Value) -> FixtureResult<Option<Row>>;

	/// Returns up to `limit` records of `model`, in store order.
	async fn select(&self, model: &str, limit: usize) -> FixtureResult<Vec<Row>>;

	/// Executes a single bulk insert of raw rows into `table`.
	///
	/// Bypasses record construction entirely; no type coercion happens
	/// beyond what the storage layer does natively. Returns the number
	/// of rows inserted.
	async fn insert_rows(&self, table: &str, rows: &[Row]) -> FixtureResult<u64>;

	/// Creates the full database schema.
	async fn create_schema(&self) -> FixtureResult<()>;
}
