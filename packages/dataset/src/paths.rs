#![allow(clippy::module_name_repetitions)]
//! Canonical file paths for the dataset directory.
//!
//! Defaults to the project root's `data/` directory; the server
//! overrides it with `KLIMA_DATA_DIR`.

use std::path::{Path, PathBuf};

use klima_dataset_models::DatasetSource;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "KLIMA_DATA_DIR";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`, falling back to
/// the current directory if the manifest is not nested as expected.
#[must_use]
pub fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Returns the data directory used when [`DATA_DIR_ENV`] is unset.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    project_root().join("data")
}

/// Returns the path of a dataset's file inside `data_dir`.
#[must_use]
pub fn source_path(data_dir: &Path, source: &DatasetSource) -> PathBuf {
    data_dir.join(&source.file)
}
