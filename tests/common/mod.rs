mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from participants for tests
pub use participants::{
    ChartField, CsvRecordStore, FormError, FormFields, FormMode, Record, RecordRepository,
    Session, Sex, StoreError,
};
