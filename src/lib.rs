//! JSON fixture loading, dumping, and management commands for
//! ORM-backed applications.
//!
//! This crate is a thin convenience layer binding a host application's
//! ORM session to JSON fixture files:
//!
//! - **Fixture system**: load and dump record snapshots as JSON fixture
//!   documents, in model mode (typed construction through a registry)
//!   or table mode (raw bulk insert)
//! - **Relation accessors**: identifier-list getters/setters for
//!   many-to-many associations, declared per model type
//! - **CLI commands**: `load-fixture`, `dump-fixture`, and `create-db`
//!   subcommands for embedding in a host management CLI
//!
//! The ORM itself stays external: this crate talks to it through the
//! [`Store`](store::Store) trait, and model types opt in by
//! implementing [`Model`](model::Model).
//!
//! # Quick start
//!
//! Create a fixture file (`fixtures/user.json`):
//!
//! ```json
//! [
//!   {
//!     "model": "app.User",
//!     "records": [
//!       {"id": 1, "name": "Ann"}
//!     ]
//!   }
//! ]
//! ```
//!
//! Register the model and load the fixture:
//!
//! ```ignore
//! use seedbed::prelude::*;
//!
//! register_model::<User>();
//!
//! let loader = FixtureLoader::new();
//! let result = loader.load_path(Path::new("fixtures/user.json"), &store).await?;
//! println!("Installed {} record(s)", result.records_loaded);
//! ```
//!
//! # Architecture
//!
//! - [`FixtureGroup`](fixtures::FixtureGroup) /
//!   [`FixtureDocument`](fixtures::FixtureDocument) - the on-disk format
//! - [`FixtureParser`](fixtures::FixtureParser) - parse fixture files
//! - [`FixtureRegistry`](fixtures::FixtureRegistry) - model path to
//!   constructor bindings, populated at startup
//! - [`FixtureLoader`](fixtures::FixtureLoader) /
//!   [`FixtureDumper`](fixtures::FixtureDumper) - transfer records
//!   between fixture files and the store
//! - [`ManyToMany`](relations::ManyToMany) /
//!   [`ManyToManyExt`](relations::ManyToManyExt) - identifier-list
//!   accessors over declared relations
//! - [`commands`] - the three management commands and their `clap`
//!   surface

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod prelude;
pub mod relations;
pub mod store;

// Re-export commonly used types at crate root
pub use config::FixtureSettings;
pub use error::{FixtureError, FixtureResult};
pub use fixtures::{
	FixtureDocument, FixtureDumper, FixtureGroup, FixtureLoader, FixtureParser, FixtureRegistry,
	register_binding, register_model,
};
pub use model::{Model, Relation, RelationKind};
pub use relations::{ManyToMany, ManyToManyExt};
pub use store::{Row, Store};
