pub mod error;
pub mod form;
pub mod lookup;
pub mod stats;
pub mod store;

pub use error::{FormError, StoreError};
pub use form::{FormFields, FormMode, Session};
pub use stats::{ChartField, count_by};
pub use store::{CsvRecordStore, RecordRepository};
