// File: src/error.rs
use std::path::PathBuf;

/// A dataset could not be turned into rows. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}, line {line}: bad value '{value}' in column '{column}'", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("cannot decode snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
}

/// Aggregates requested over rows that cannot produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("statistics dataset is empty")]
    EmptyDataset,

    #[error("every root in the statistics dataset is the placeholder '{placeholder}'")]
    OnlyPlaceholderRoots { placeholder: String },
}

#[derive(Debug, thiserror::Error)]
pub enum VerbInfoError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("config error: {0}")]
    Config(String),

    #[error("snapshot write failed: {0}")]
    SnapshotWrite(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = VerbInfoError> = std::result::Result<T, E>;
