//! Data loader
//!
//! Reads item tokens from an input file into a `FrequencyTable` and writes
//! the `name count` snapshot.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::error::{GrocerError, Result};
use crate::core::model::FrequencyTable;

/// Load item counts from `path`.
///
/// Tokens are separated by any run of whitespace. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn load(path: &Path) -> Result<FrequencyTable> {
    if path.is_dir() {
        return Err(GrocerError::FileOpen {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
        });
    }

    let mut file = File::open(path).map_err(|source| GrocerError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|source| GrocerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let content = String::from_utf8_lossy(&buffer);
    let table: FrequencyTable = content.split_whitespace().collect();

    if table.is_empty() {
        warn!(path = %path.display(), "input file contains no items");
    }
    info!(
        path = %path.display(),
        items = table.len(),
        tokens = table.total(),
        "loaded inventory"
    );

    Ok(table)
}

/// Write `table` to `path` as `name count` lines in name order.
///
/// Existing content is replaced. A missing parent directory is created.
pub fn write_snapshot(table: &FrequencyTable, path: &Path) -> Result<()> {
    let snapshot_err = |source| GrocerError::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(snapshot_err)?;
        }
    }

    let file = File::create(path).map_err(snapshot_err)?;
    let mut writer = BufWriter::new(file);
    for (name, count) in table.entries() {
        writeln!(writer, "{} {}", name, count).map_err(snapshot_err)?;
    }
    writer.flush().map_err(snapshot_err)?;

    debug!(path = %path.display(), entries = table.len(), "wrote snapshot");
    Ok(())
}

/// Load `input` and, when `snapshot` is set, persist the table there.
///
/// Snapshot failures are logged and otherwise ignored.
pub fn load_and_snapshot(input: &Path, snapshot: Option<&Path>) -> Result<FrequencyTable> {
    let table = load(input)?;

    if let Some(snapshot) = snapshot {
        if let Err(e) = write_snapshot(&table, snapshot) {
            warn!(error = %e, "snapshot not written");
        }
    }

    Ok(table)
}
