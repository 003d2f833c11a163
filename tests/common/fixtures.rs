use participants::{CsvRecordStore, FormFields, Record, Session, Sex};

/// Creates a store backed by a file in a fresh temporary directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (CsvRecordStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let store = CsvRecordStore::open(dir.path().join("participants_data.csv"));
    (store, dir)
}

/// Creates a session over a temporary store.
pub fn create_test_session() -> (Session, tempfile::TempDir) {
    let (store, dir) = create_test_store();
    (Session::new(store), dir)
}

/// Creates a Record with test data
pub fn make_record(name: &str, province: &str) -> Record {
    Record {
        name: name.to_string(),
        sex: Sex::Feminine,
        marital_status: "Marié(e)".to_string(),
        education_level: "Niveau secondaire".to_string(),
        phone: 243_812_345_678,
        age: 34,
        commune: "Lemba".to_string(),
        province: province.to_string(),
        reason: "Communication".to_string(),
    }
}

/// Creates FormFields with only the name filled in
pub fn make_fields(name: &str) -> FormFields {
    FormFields {
        name: name.to_string(),
        ..FormFields::default()
    }
}
