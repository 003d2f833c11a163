use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{
    core::{error::StoreError, store::RecordRepository},
    models::{COLUMNS, Record},
};

/// Record store backed by a single CSV file that is rewritten in full on
/// every `persist`.
pub struct CsvRecordStore {
    path: PathBuf,
    records: Vec<Record>,
    durable: Vec<Record>,
}

impl std::fmt::Debug for CsvRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvRecordStore")
            .field("path", &self.path)
            .field("rows", &self.records.len())
            .finish()
    }
}

impl CsvRecordStore {
    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty table; read failures are logged, never returned.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = Self::load(&path);
        Self {
            path,
            durable: records.clone(),
            records,
        }
    }

    /// Read all records from `path`, substituting an empty table on failure.
    pub fn load(path: &Path) -> Vec<Record> {
        match Self::try_load(path) {
            Ok(records) => {
                tracing::info!(path = %path.display(), rows = records.len(), "loaded records");
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "starting with an empty table");
                Vec::new()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Vec<Record>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let load_err = |source| StoreError::Load {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::Reader::from_path(path).map_err(load_err)?;
        reader
            .deserialize()
            .collect::<csv::Result<Vec<Record>>>()
            .map_err(load_err)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

impl RecordRepository for CsvRecordStore {
    fn snapshot(&self) -> &[Record] {
        &self.records
    }

    fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len()
    }

    fn update(&mut self, index: usize, record: Record) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.records[index] = record;
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<Record, StoreError> {
        self.check_index(index)?;
        Ok(self.records.remove(index))
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        match write_atomically(&self.path, &self.records) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), rows = self.records.len(), "saved records");
                self.durable.clone_from(&self.records);
                Ok(())
            }
            Err(source) => {
                tracing::error!(path = %self.path.display(), error = %source, "failed to save records");
                self.records.clone_from(&self.durable);
                Err(StoreError::Persistence {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

/// Write to a sibling temporary file, then rename it over `path` so readers
/// see either the old or the new content.
fn write_atomically(path: &Path, records: &[Record]) -> csv::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "records.csv".to_string());
    let tmp_path = dir.join(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

    let result = write_csv(&tmp_path, records)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(csv::Error::from));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_csv(path: &Path, records: &[Record]) -> csv::Result<()> {
    let file = File::create(path)?;
    // Header is written by hand so an empty table still has one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    let file = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            sex: Sex::Masculine,
            marital_status: "Célibataire".to_string(),
            education_level: "Sans instruction".to_string(),
            phone: 0,
            age: 0,
            commune: String::new(),
            province: String::new(),
            reason: "Éducation".to_string(),
        }
    }

    #[test]
    fn empty_store_writes_header_only() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        let mut store = CsvRecordStore::open(&path);
        store.persist().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), COLUMNS.join(","));
    }

    #[test]
    fn no_temporary_files_left_behind() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        let mut store = CsvRecordStore::open(&path);
        store.append(record("Alice"));
        store.persist().unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn failed_persist_rolls_back_working_copy() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("data.csv");
        let mut store = CsvRecordStore::open(&path);

        assert_eq!(store.append(record("Alice")), 1);
        let err = store.persist().unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "foo,bar\n1,2\n").unwrap();

        assert!(CsvRecordStore::try_load(&path).is_err());
        assert!(CsvRecordStore::open(&path).is_empty());
    }
}
