//! Model trait and relation manifest types.
//!
//! Model types opt in to fixture support by implementing [`Model`] and
//! declaring their associations in a static relation manifest. The
//! manifest replaces runtime relationship reflection: every relation
//! is listed explicitly with its name, target model path, and direction.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Direction of an association between two model types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
	/// One record on this side links to many on the other.
	OneToMany,

	/// Many records on this side link to one on the other.
	ManyToOne,

	/// Either side may link to multiple records, via a join table.
	ManyToMany,
}

/// A statically declared association between two model types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
	/// Relation name as it appears on the owning type (e.g. `"tags"`).
	pub name: &'static str,

	/// Model path of the target type (e.g. `"app.Tag"`).
	pub target: &'static str,

	/// Direction of the association.
	pub kind: RelationKind,
}

impl Relation {
	/// Creates a relation manifest entry.
	pub const fn new(name: &'static str, target: &'static str, kind: RelationKind) -> Self {
		Self { name, target, kind }
	}
}

/// A type mapped to a storage table that can round-trip through fixtures.
///
/// Records are carried as flat JSON mappings; the serde implementations
/// define the column set, so date/time fields serialize as ISO-8601
/// strings and UUID fields as plain strings.
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Model for User {
///     const MODEL: &'static str = "app.User";
///     const TABLE: &'static str = "users";
///
///     fn pk(&self) -> Value {
///         json!(self.id)
///     }
/// }
/// ```
pub trait Model: Serialize + DeserializeOwned + Send + Sync + 'static {
	/// Dotted model path in `app.Type` format (e.g. `"app.User"`).
	const MODEL: &'static str;

	/// Name of the storage table backing this type.
	const TABLE: &'static str;

	/// Returns the primary key of this record.
	fn pk(&self) -> Value;

	/// Returns the relation manifest for this type.
	///
	/// Types without associations keep the default empty manifest.
	fn relations() -> &'static [Relation] {
		&[]
	}

	/// Returns the app label portion of the model path.
	fn app_label() -> &'static str {
		Self::MODEL.split('.').next().unwrap_or(Self::MODEL)
	}

	/// Returns the type name portion of the model path.
	fn model_name() -> &'static str {
		Self::MODEL.rsplit('.').next().unwrap_or(Self::MODEL)
	}
}
