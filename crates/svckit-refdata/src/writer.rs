//! Flat-file output for generated SQL.
//!
//! One statement per line, UTF-8, flushed before return. The file is
//! truncated on each run; generation is idempotent from source data.

use crate::error::RefDataResult;
use crate::sql::InsertStatement;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write statements to `path`, one per line.
pub fn write_statements(path: &Path, statements: &[InsertStatement]) -> RefDataResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for statement in statements {
        writeln!(writer, "{statement}")?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        statements = statements.len(),
        "Wrote SQL file"
    );
    Ok(())
}
