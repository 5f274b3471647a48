//! JSON artifact writer for the two record collections.
//!
//! Each collection is written as a pretty-printed JSON array with a 4-space
//! indent. Both files are staged next to their targets first and only
//! renamed into place once both stages succeeded.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tripscrape_core::{HotelRecord, LocationRecord};

use crate::error::ScrapeError;

const INDENT: &[u8] = b"    ";

/// Writes the locations and hotels artifacts to fixed paths.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    locations_path: PathBuf,
    hotels_path: PathBuf,
}

impl OutputWriter {
    pub fn new(locations_path: impl Into<PathBuf>, hotels_path: impl Into<PathBuf>) -> Self {
        Self {
            locations_path: locations_path.into(),
            hotels_path: hotels_path.into(),
        }
    }

    #[must_use]
    pub fn locations_path(&self) -> &Path {
        &self.locations_path
    }

    #[must_use]
    pub fn hotels_path(&self) -> &Path {
        &self.hotels_path
    }

    /// Overwrite both artifacts with `locations` and `hotels`.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Encode`] if a record cannot be serialized.
    /// - [`ScrapeError::Io`] if a file cannot be created, written or renamed.
    pub fn write(
        &self,
        locations: &[LocationRecord],
        hotels: &[HotelRecord],
    ) -> Result<(), ScrapeError> {
        let location_bytes = encode(&self.locations_path, locations)?;
        let hotel_bytes = encode(&self.hotels_path, hotels)?;

        let location_stage = stage(&self.locations_path, &location_bytes)?;
        let hotel_stage = match stage(&self.hotels_path, &hotel_bytes) {
            Ok(p) => p,
            Err(e) => {
                discard(&location_stage);
                return Err(e);
            }
        };

        if let Err(e) = commit(&location_stage, &self.locations_path) {
            discard(&hotel_stage);
            return Err(e);
        }
        commit(&hotel_stage, &self.hotels_path)?;

        tracing::info!(
            path = %self.locations_path.display(),
            records = locations.len(),
            "wrote locations"
        );
        tracing::info!(
            path = %self.hotels_path.display(),
            records = hotels.len(),
            "wrote hotels"
        );
        Ok(())
    }
}

/// Write a single JSON array artifact, replacing any existing file.
///
/// # Errors
///
/// Same as [`OutputWriter::write`].
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ScrapeError> {
    let bytes = encode(path, records)?;
    let staged = stage(path, &bytes)?;
    commit(&staged, path)
}

/// Read back an artifact produced by [`write_json_array`].
///
/// # Errors
///
/// [`ScrapeError::Io`] if the file cannot be read, [`ScrapeError::Encode`]
/// if it is not a JSON array of `T`.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ScrapeError> {
    let bytes = std::fs::read(path).map_err(|source| ScrapeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ScrapeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

fn encode<T: Serialize>(path: &Path, records: &[T]) -> Result<Vec<u8>, ScrapeError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|source| ScrapeError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');
    Ok(buf)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn stage(path: &Path, bytes: &[u8]) -> Result<PathBuf, ScrapeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ScrapeError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let staged = staging_path(path);
    std::fs::write(&staged, bytes).map_err(|source| ScrapeError::Io {
        path: staged.clone(),
        source,
    })?;
    Ok(staged)
}

fn commit(staged: &Path, path: &Path) -> Result<(), ScrapeError> {
    std::fs::rename(staged, path).map_err(|source| {
        discard(staged);
        ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn discard(staged: &Path) {
    if let Err(err) = std::fs::remove_file(staged) {
        tracing::debug!(path = %staged.display(), error = %err, "could not remove staged file");
    }
}
