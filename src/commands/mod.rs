//! Management commands: `load-fixture`, `dump-fixture`, `create-db`.
//!
//! Each command is a thin argument wrapper over the fixture system or
//! the store's schema-creation call. The [`cli`] module exposes them as
//! `clap` subcommands for embedding in a host management CLI.

pub mod cli;
mod create_db;
mod dump_fixture;
mod load_fixture;

pub use cli::{FixtureCli, FixtureCommand};
pub use create_db::CreateDbCommand;
pub use dump_fixture::{DumpFixtureArgs, DumpFixtureCommand, DumpFixtureOptions};
pub use load_fixture::{LoadFixtureArgs, LoadFixtureCommand, LoadFixtureOptions};
