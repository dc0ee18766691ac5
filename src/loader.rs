// File: src/loader.rs
use crate::core::types::{Datasets, StatRecord, VerbRecord};
use crate::error::LoadError;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const VERB_COLUMNS: [&str; 5] = ["root", "romanized", "verb_forms", "count_vf", "frequency"];
pub const STAT_COLUMNS: [&str; 4] = ["root", "romanized", "root_length", "frequency"];

/// Column positions resolved from the header row, in the order requested.
struct Columns<const N: usize> {
    positions: [usize; N],
}

impl<const N: usize> Columns<N> {
    fn resolve(headers: &csv::StringRecord, names: [&str; N], path: &Path) -> Result<Self, LoadError> {
        let mut positions = [0; N];
        for (slot, name) in positions.iter_mut().zip(names) {
            *slot = headers
                .iter()
                .position(|h| h.trim().trim_start_matches('\u{feff}') == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column: name.to_string(),
                })?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, row: &'r csv::StringRecord, column: usize) -> &'r str {
        row.get(self.positions[column]).unwrap_or("").trim()
    }
}

pub fn load_verbs(path: &Path) -> Result<Vec<VerbRecord>, LoadError> {
    let rows = read_verbs(open(path)?, path)?;
    info!("loaded {} lookup rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_stats(path: &Path) -> Result<Vec<StatRecord>, LoadError> {
    let rows = read_stats(open(path)?, path)?;
    info!("loaded {} statistics rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_datasets(verbs_path: &Path, stats_path: &Path) -> Result<Datasets, LoadError> {
    Ok(Datasets {
        verbs: load_verbs(verbs_path)?,
        stats: load_stats(stats_path)?,
    })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `path` only labels errors; the rows come from `reader`.
pub fn read_verbs<R: Read>(reader: R, path: &Path) -> Result<Vec<VerbRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    let csv_err = |source: csv::Error| LoadError::Csv { path: path.to_path_buf(), source };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = Columns::resolve(&headers, VERB_COLUMNS, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        let line = line_of(&row);
        let romanized = columns.field(&row, 1);
        rows.push(VerbRecord {
            root: columns.field(&row, 0).to_string(),
            romanized: (!romanized.is_empty()).then(|| romanized.to_string()),
            verb_forms: columns.field(&row, 2).to_string(),
            count_vf: columns.field(&row, 3).to_string(),
            frequency: parse_frequency(columns.field(&row, 4), path, line)?,
        });
    }
    Ok(rows)
}

pub fn read_stats<R: Read>(reader: R, path: &Path) -> Result<Vec<StatRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    let csv_err = |source: csv::Error| LoadError::Csv { path: path.to_path_buf(), source };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let columns = Columns::resolve(&headers, STAT_COLUMNS, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        let line = line_of(&row);
        let romanized = columns.field(&row, 1);
        rows.push(StatRecord {
            root: columns.field(&row, 0).to_string(),
            romanized: (!romanized.is_empty()).then(|| romanized.to_string()),
            root_length: parse_root_length(columns.field(&row, 2), path, line)?,
            frequency: parse_frequency(columns.field(&row, 3), path, line)?,
        });
    }
    Ok(rows)
}

fn line_of(row: &csv::StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or(0)
}

fn invalid(path: &Path, line: u64, column: &str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

fn parse_frequency(value: &str, path: &Path, line: u64) -> Result<f64, LoadError> {
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Ok(f),
        _ => Err(invalid(path, line, "frequency", value)),
    }
}

/// Accepts "4" and the "4.0" a dataframe export tends to write.
fn parse_root_length(value: &str, path: &Path, line: u64) -> Result<u32, LoadError> {
    let parsed = value.parse::<u32>().ok().or_else(|| {
        value
            .parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
            .map(|f| f as u32)
    });
    match parsed {
        Some(len) if len >= 1 => Ok(len),
        _ => Err(invalid(path, line, "root_length", value)),
    }
}
