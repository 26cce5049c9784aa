//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used
//! items from the seedbed crate.
//!
//! # Example
//!
//! ```ignore
//! use seedbed::prelude::*;
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Configuration
pub use crate::config::{DEFAULT_DUMP_LIMIT, FIXTURES_DIR_KEY, FixtureSettings};

// Model and relation types
pub use crate::model::{Model, Relation, RelationKind};
pub use crate::relations::{ManyToMany, ManyToManyExt};

// Store seam
pub use crate::store::{Row, Store};

// Fixture types
pub use crate::fixtures::{
	DumpResult, FixtureDocument, FixtureDumper, FixtureGroup, FixtureLoader, FixtureParser,
	FixtureRegistry, FixtureSerializer, GroupSource, LoadResult, ModelBinding, RecordEncoder,
	register_binding, register_model,
};

// Command types
pub use crate::commands::{
	CreateDbCommand, DumpFixtureArgs, DumpFixtureCommand, DumpFixtureOptions, FixtureCli,
	FixtureCommand, LoadFixtureArgs, LoadFixtureCommand, LoadFixtureOptions,
};
