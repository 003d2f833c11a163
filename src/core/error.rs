use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row {index} does not exist (table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to write {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("name is required")]
    Validation,

    #[error("row {index} does not exist (table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}
