//! Well-known paths
//!
//! Both defaults are relative to the working directory the tool is run from.

use std::fs::File;
use std::path::{Path, PathBuf};

/// Input file used when the user does not name one
pub const DEFAULT_INPUT: &str = "items/CS210_Project_Three_Input_File.txt";

/// Where the frequency snapshot is written after every load
pub const DEFAULT_SNAPSHOT: &str = "items/frequency.dat";

pub fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

pub fn default_snapshot() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT)
}

/// Check whether `path` can currently be opened for reading.
///
/// The handle is dropped immediately; this is only a probe.
pub fn can_open(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file() && File::open(path).is_ok()
}
