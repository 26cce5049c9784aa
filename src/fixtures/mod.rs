//! Fixture system: format types, parsing, registry, loading, dumping.
//!
//! A fixture document is a JSON array of groups; each group names either
//! a registered `model` path or a raw `table`, plus the `records` to
//! install. Model groups construct typed records through the registry
//! and commit once per group; table groups go through a single bulk
//! insert with no construction step.

pub mod dumper;
pub mod format;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod serializer;

pub use dumper::{DumpResult, FixtureDumper, RecordEncoder};
pub use format::{FixtureDocument, FixtureGroup, GroupSource};
pub use loader::{FixtureLoader, LoadResult};
pub use parser::FixtureParser;
pub use registry::{FixtureRegistry, ModelBinding, register_binding, register_model};
pub use serializer::{FixtureSerializer, encode_datetime, encode_uuid, snake_case};
