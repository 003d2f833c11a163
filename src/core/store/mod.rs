mod csv_file;

pub use csv_file::CsvRecordStore;

use crate::{core::error::StoreError, models::Record};

/// Ordered, positionally indexed record storage.
///
/// `append`, `update` and `delete` only transform the in-memory sequence; a
/// following `persist` makes them durable. When `persist` fails the sequence
/// reverts to the last durable state.
pub trait RecordRepository {
    fn snapshot(&self) -> &[Record];
    fn append(&mut self, record: Record) -> usize;
    fn update(&mut self, index: usize, record: Record) -> Result<(), StoreError>;
    fn delete(&mut self, index: usize) -> Result<Record, StoreError>;
    fn persist(&mut self) -> Result<(), StoreError>;

    fn len(&self) -> usize {
        self.snapshot().len()
    }

    fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn get(&self, index: usize) -> Option<&Record> {
        self.snapshot().get(index)
    }
}
