// File: src/persistence.rs
use crate::core::types::Datasets;
use crate::error::LoadError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Bumped whenever `Datasets` changes shape.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot {
    version: u32,
    datasets: Datasets,
}

/// Writes both row sets to `path`. The file is replaced atomically, so a
/// reader never sees a half-written snapshot.
pub fn save_snapshot(datasets: &Datasets, path: &Path) -> Result<(), Error> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        datasets: datasets.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)
            .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Datasets, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot =
        bincode::deserialize_from(BufReader::new(file)).map_err(|source| LoadError::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(LoadError::Snapshot {
            path: path.to_path_buf(),
            source: Box::new(bincode::ErrorKind::Custom(format!(
                "snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            ))),
        });
    }
    Ok(snapshot.datasets)
}
