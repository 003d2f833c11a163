use std::path::Path;

use crate::core::{CsvRecordStore, Session};

#[derive(Debug)]
pub struct AppState {
    pub session: Session<CsvRecordStore>,
}

impl AppState {
    pub fn open<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            session: Session::new(CsvRecordStore::open(data_file)),
        }
    }
}
