//! Identifier-list accessors for many-to-many relations.
//!
//! Model types opt in per relation by implementing [`ManyToMany`]; the
//! blanket [`ManyToManyExt`] then provides `related_ids` /
//! `set_related_ids`, exposing the association as a list of primary
//! keys instead of full records. Accessors are composed onto the type
//! through traits rather than generated by runtime reflection.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FixtureError, FixtureResult};
use crate::model::{Model, Relation, RelationKind};
use crate::store::Store;

/// Opt-in capability for one many-to-many association.
///
/// `T` is the related model type; the collection lives in memory on the
/// owning record, mirroring the ORM's collection attribute. The
/// relation must also appear in the owning type's
/// [`Model::relations`] manifest; the setter verifies it there.
pub trait ManyToMany<T: Model>: Model {
	/// Manifest entry describing this association.
	const RELATION: Relation;

	/// Returns the records currently in the association collection.
	fn related(&self) -> &[T];

	/// Replaces the association collection.
	fn set_related(&mut self, related: Vec<T>);
}

/// Identifier-list accessors derived from a [`ManyToMany`] declaration.
#[async_trait]
pub trait ManyToManyExt<T: Model>: ManyToMany<T> {
	/// Returns the primary keys of the currently associated records.
	///
	/// Order follows the iteration order of the underlying collection
	/// and is not guaranteed stable across loads.
	fn related_ids(&self) -> Vec<Value> {
		self.related().iter().map(Model::pk).collect()
	}

	/// Replaces the association with records looked up by primary key.
	///
	/// The relation is verified against the owning type's declared
	/// manifest first: the entry must exist and be many-to-many.
	/// Resolves each identifier with one store lookup (an N-query
	/// pattern, sized for fixture-scale collections). Any identifier
	/// that fails to resolve aborts the whole assignment before the
	/// collection is touched; no partial association is created.
	async fn set_related_ids(&mut self, store: &dyn Store, ids: &[Value]) -> FixtureResult<()> {
		let declared = Self::relations()
			.iter()
			.find(|relation| relation.name == Self::RELATION.name);
		match declared {
			Some(relation) if relation.kind == RelationKind::ManyToMany => {}
			Some(relation) => {
				return Err(FixtureError::ValidationError {
					field: "relation".to_string(),
					message: format!(
						"relation '{}' on {} is declared {:?}, not many-to-many",
						relation.name,
						Self::MODEL,
						relation.kind
					),
				});
			}
			None => {
				return Err(FixtureError::ValidationError {
					field: "relation".to_string(),
					message: format!(
						"relation '{}' is not declared in {}'s manifest",
						Self::RELATION.name,
						Self::MODEL
					),
				});
			}
		}

		let mut resolved = Vec::with_capacity(ids.len());
		for id in ids {
			let row = store.get(T::MODEL, id).await?.ok_or_else(|| FixtureError::NotFound {
				model: T::MODEL.to_string(),
				pk: id.clone(),
			})?;
			let record: T = serde_json::from_value(Value::Object(row)).map_err(|e| {
				FixtureError::SerializationError(format!("cannot construct {}: {e}", T::MODEL))
			})?;
			resolved.push(record);
		}

		self.set_related(resolved);
		Ok(())
	}
}

#[async_trait]
impl<T: Model, M: ManyToMany<T>> ManyToManyExt<T> for M {}
