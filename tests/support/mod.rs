//! Shared test support: an in-memory store and typed test models.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

use seedbed::error::FixtureResult;
use seedbed::model::{Model, Relation, RelationKind};
use seedbed::relations::ManyToMany;
use seedbed::store::{Row, Store};

#[derive(Default)]
struct State {
	staged: Vec<(String, Row)>,
	committed: HashMap<String, Vec<Row>>,
	tables: HashMap<String, Vec<Row>>,
	schema_created: bool,
}

/// In-memory store standing in for the external ORM session.
#[derive(Default)]
pub struct MemoryStore {
	state: Mutex<State>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs committed rows directly, bypassing the staging path.
	pub fn seed(&self, model: &str, rows: Vec<Row>) {
		self.state
			.lock()
			.committed
			.entry(model.to_string())
			.or_default()
			.extend(rows);
	}

	pub fn rows(&self, model: &str) -> Vec<Row> {
		self.state
			.lock()
			.committed
			.get(model)
			.cloned()
			.unwrap_or_default()
	}

	pub fn table_rows(&self, table: &str) -> Vec<Row> {
		self.state
			.lock()
			.tables
			.get(table)
			.cloned()
			.unwrap_or_default()
	}

	pub fn clear_model(&self, model: &str) {
		self.state.lock().committed.remove(model);
	}

	pub fn staged_count(&self) -> usize {
		self.state.lock().staged.len()
	}

	pub fn schema_created(&self) -> bool {
		self.state.lock().schema_created
	}
}

#[async_trait]
impl Store for MemoryStore {
	async fn stage(&self, model: &str, row: Row) -> FixtureResult<()> {
		self.state.lock().staged.push((model.to_string(), row));
		Ok(())
	}

	async fn commit(&self) -> FixtureResult<()> {
		let mut state = self.state.lock();
		let staged = std::mem::take(&mut state.staged);
		for (model, row) in staged {
			state.committed.entry(model).or_default().push(row);
		}
		Ok(())
	}

	async fn get(&self, model: &str, pk: &Value) -> FixtureResult<Option<Row>> {
		let state = self.state.lock();
		Ok(state
			.committed
			.get(model)
			.and_then(|rows| rows.iter().find(|row| row.get("id") == Some(pk)))
			.cloned())
	}

	async fn select(&self, model: &str, limit: usize) -> FixtureResult<Vec<Row>> {
		let state = self.state.lock();
		Ok(state
			.committed
			.get(model)
			.map(|rows| rows.iter().take(limit).cloned().collect())
			.unwrap_or_default())
	}

	async fn insert_rows(&self, table: &str, rows: &[Row]) -> FixtureResult<u64> {
		self.state
			.lock()
			.tables
			.entry(table.to_string())
			.or_default()
			.extend(rows.to_vec());
		Ok(rows.len() as u64)
	}

	async fn create_schema(&self) -> FixtureResult<()> {
		self.state.lock().schema_created = true;
		Ok(())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Tag {
	pub id: i64,
	pub label: String,
}

impl Model for Tag {
	const MODEL: &'static str = "app.Tag";
	const TABLE: &'static str = "tags";

	fn pk(&self) -> Value {
		json!(self.id)
	}
}

static USER_RELATIONS: [Relation; 1] =
	[Relation::new("tags", "app.Tag", RelationKind::ManyToMany)];

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
	pub id: i64,
	pub name: String,

	// In-memory association collection; not a column.
	#[serde(skip)]
	pub tags: Vec<Tag>,
}

impl Model for User {
	const MODEL: &'static str = "app.User";
	const TABLE: &'static str = "users";

	fn pk(&self) -> Value {
		json!(self.id)
	}

	fn relations() -> &'static [Relation] {
		&USER_RELATIONS
	}
}

impl ManyToMany<Tag> for User {
	const RELATION: Relation = Relation::new("tags", "app.Tag", RelationKind::ManyToMany);

	fn related(&self) -> &[Tag] {
		&self.tags
	}

	fn set_related(&mut self, related: Vec<Tag>) {
		self.tags = related;
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Event {
	pub id: Uuid,
	pub name: String,
	pub starts_at: DateTime<Utc>,
}

impl Model for Event {
	const MODEL: &'static str = "app.Event";
	const TABLE: &'static str = "events";

	fn pk(&self) -> Value {
		json!(self.id)
	}
}

/// Converts a JSON object literal into a row.
pub fn row(value: Value) -> Row {
	value.as_object().expect("row literal must be an object").clone()
}

/// Registers every test model in the global fixture registry.
///
/// Registration is idempotent, so concurrent tests can call this freely.
pub fn register_test_models() {
	seedbed::register_model::<User>();
	seedbed::register_model::<Tag>();
	seedbed::register_model::<Event>();
}
