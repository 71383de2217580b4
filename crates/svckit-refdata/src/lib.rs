//! Reference data generators for svckit.
//!
//! Two one-shot batch pipelines, each fetch → transform → write:
//! - `country`: restcountries JSON array → `country` table inserts
//! - `currency`: ISO 4217 CSV joined with a symbol table → `currency` inserts
//!
//! Output is a flat UTF-8 file of SQL `INSERT` statements. No retries,
//! no schema validation beyond null checks, no transactional wrapping.

pub mod client;
pub mod country;
pub mod currency;
pub mod error;
pub mod sql;
pub mod writer;

pub use client::RefDataClient;
pub use error::{RefDataError, RefDataResult};
pub use sql::{escape, InsertStatement, SqlValue};
pub use writer::write_statements;
