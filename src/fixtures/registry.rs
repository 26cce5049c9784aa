//! Model registry for fixture loading.
//!
//! Model paths found in fixture documents resolve through an explicit
//! registry populated at startup, replacing dynamic class loading by
//! string path. An unregistered path is a clear "model not found"
//! error rather than an import failure.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde_json::Value;

use crate::error::{FixtureError, FixtureResult};
use crate::model::Model;
use crate::store::Row;

/// Constructor binding for one registered model type.
///
/// `construct` builds the typed record from a raw fixture row (treating
/// the row's keys as constructor field names) and hands back the
/// canonical row for staging. Construction failure on extra or missing
/// fields propagates to the caller.
pub trait ModelBinding: Send + Sync {
	/// Returns the registered model path (e.g. `"app.User"`).
	fn model_path(&self) -> &str;

	/// Returns the storage table backing the model.
	fn table(&self) -> &str;

	/// Validates a raw row through the typed record and returns the
	/// canonical row.
	fn construct(&self, row: &Row) -> FixtureResult<Row>;
}

struct TypedBinding<M: Model> {
	_marker: PhantomData<fn() -> M>,
}

impl<M: Model> ModelBinding for TypedBinding<M> {
	fn model_path(&self) -> &str {
		M::MODEL
	}

	fn table(&self) -> &str {
		M::TABLE
	}

	fn construct(&self, row: &Row) -> FixtureResult<Row> {
		let record: M = serde_json::from_value(Value::Object(row.clone())).map_err(|e| {
			FixtureError::SerializationError(format!("cannot construct {}: {e}", M::MODEL))
		})?;
		match serde_json::to_value(&record)? {
			Value::Object(canonical) => Ok(canonical),
			other => Err(FixtureError::SerializationError(format!(
				"{} serialized to a non-object value: {other}",
				M::MODEL
			))),
		}
	}
}

/// Global registry of model bindings.
static FIXTURE_REGISTRY: Lazy<RwLock<HashMap<String, Arc<dyn ModelBinding>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a model type in the global fixture registry.
///
/// Idempotent; re-registering a path replaces its binding.
///
/// # Example
///
/// ```ignore
/// register_model::<User>();
/// register_model::<Tag>();
/// ```
pub fn register_model<M: Model>() {
	register_binding(Arc::new(TypedBinding::<M> {
		_marker: PhantomData,
	}));
}

/// Registers a hand-written binding in the global fixture registry.
///
/// The binding is keyed by its [`ModelBinding::model_path`]. Use this
/// instead of [`register_model`] when record construction needs custom
/// handling, such as defaulting or renaming fields before the typed
/// record is built.
pub fn register_binding(binding: Arc<dyn ModelBinding>) {
	FIXTURE_REGISTRY
		.write()
		.insert(binding.model_path().to_string(), binding);
}

/// Handle providing access to registered model bindings.
#[derive(Debug, Default)]
pub struct FixtureRegistry;

impl FixtureRegistry {
	/// Creates a new registry handle.
	pub fn new() -> Self {
		Self
	}

	/// Gets the binding for a model path, if registered.
	pub fn get(&self, model_path: &str) -> Option<Arc<dyn ModelBinding>> {
		FIXTURE_REGISTRY.read().get(model_path).cloned()
	}

	/// Checks whether a model path is registered.
	pub fn contains(&self, model_path: &str) -> bool {
		FIXTURE_REGISTRY.read().contains_key(model_path)
	}

	/// Returns all registered model paths.
	pub fn model_paths(&self) -> Vec<String> {
		FIXTURE_REGISTRY.read().keys().cloned().collect()
	}

	/// Returns the number of registered bindings.
	pub fn len(&self) -> usize {
		FIXTURE_REGISTRY.read().len()
	}

	/// Returns true if no bindings are registered.
	pub fn is_empty(&self) -> bool {
		FIXTURE_REGISTRY.read().is_empty()
	}

	/// Clears all registered bindings.
	///
	/// This is primarily useful for testing.
	pub fn clear(&self) {
		FIXTURE_REGISTRY.write().clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde::{Deserialize, Serialize};
	use serde_json::json;

	#[derive(Debug, Serialize, Deserialize)]
	#[serde(deny_unknown_fields)]
	struct Gadget {
		id: i64,
		name: String,
	}

	impl Model for Gadget {
		const MODEL: &'static str = "registry_tests.Gadget";
		const TABLE: &'static str = "gadgets";

		fn pk(&self) -> Value {
			json!(self.id)
		}
	}

	fn row(value: Value) -> Row {
		value.as_object().unwrap().clone()
	}

	#[rstest]
	fn test_register_and_get() {
		register_model::<Gadget>();

		let registry = FixtureRegistry::new();
		assert!(registry.contains("registry_tests.Gadget"));
		assert!(!registry.contains("registry_tests.Unknown"));

		let binding = registry.get("registry_tests.Gadget").unwrap();
		assert_eq!(binding.model_path(), "registry_tests.Gadget");
		assert_eq!(binding.table(), "gadgets");
	}

	#[rstest]
	fn test_construct_valid_row() {
		register_model::<Gadget>();

		let binding = FixtureRegistry::new().get("registry_tests.Gadget").unwrap();
		let canonical = binding
			.construct(&row(json!({"id": 1, "name": "sprocket"})))
			.unwrap();
		assert_eq!(canonical["id"], json!(1));
		assert_eq!(canonical["name"], json!("sprocket"));
	}

	#[rstest]
	fn test_construct_rejects_extra_field() {
		register_model::<Gadget>();

		let binding = FixtureRegistry::new().get("registry_tests.Gadget").unwrap();
		let result = binding.construct(&row(json!({"id": 1, "name": "x", "color": "red"})));
		assert!(matches!(result, Err(FixtureError::SerializationError(_))));
	}

	#[rstest]
	fn test_construct_rejects_missing_field() {
		register_model::<Gadget>();

		let binding = FixtureRegistry::new().get("registry_tests.Gadget").unwrap();
		let result = binding.construct(&row(json!({"id": 1})));
		assert!(matches!(result, Err(FixtureError::SerializationError(_))));
	}

	struct DefaultingGadgetBinding;

	impl ModelBinding for DefaultingGadgetBinding {
		fn model_path(&self) -> &str {
			"registry_tests.NamedGadget"
		}

		fn table(&self) -> &str {
			"named_gadgets"
		}

		fn construct(&self, row: &Row) -> FixtureResult<Row> {
			let mut row = row.clone();
			row.entry("name".to_string())
				.or_insert_with(|| json!("unnamed"));
			let record: Gadget = serde_json::from_value(Value::Object(row))
				.map_err(|e| FixtureError::SerializationError(e.to_string()))?;
			match serde_json::to_value(&record)? {
				Value::Object(canonical) => Ok(canonical),
				other => Err(FixtureError::SerializationError(format!(
					"non-object value: {other}"
				))),
			}
		}
	}

	#[rstest]
	fn test_register_custom_binding() {
		register_binding(Arc::new(DefaultingGadgetBinding));

		let registry = FixtureRegistry::new();
		let binding = registry.get("registry_tests.NamedGadget").unwrap();
		assert_eq!(binding.table(), "named_gadgets");

		// The custom binding fills in the missing field before the
		// typed record is constructed.
		let canonical = binding.construct(&row(json!({"id": 3}))).unwrap();
		assert_eq!(canonical["name"], json!("unnamed"));
	}

	#[rstest]
	fn test_model_paths() {
		register_model::<Gadget>();

		let registry = FixtureRegistry::new();
		assert!(
			registry
				.model_paths()
				.contains(&"registry_tests.Gadget".to_string())
		);
		assert!(!registry.is_empty());
	}
}
