pub mod models;
pub mod core;

pub use models::{Record, Sex};
pub use crate::core::{
    ChartField, CsvRecordStore, FormError, FormFields, FormMode, RecordRepository, Session,
    StoreError,
};

#[cfg(feature = "gui")]
pub mod gui;
