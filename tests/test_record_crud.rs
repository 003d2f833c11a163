//! Integration tests for record store CRUD operations.
//!
//! Tests cover:
//! - Appending records and reading them back
//! - Updating a single row in place
//! - Deleting rows with index shifting
//! - Out-of-range indices

mod common;

use common::*;

#[test]
fn test_append_grows_by_one() -> anyhow::Result<()> {
    let (mut store, _temp_dir) = create_test_store();
    store.append(make_record("Amani", "Kinshasa"));
    store.persist()?;

    let before = store.len();
    let record = make_record("Bisimwa", "Sud-Kivu");
    let new_len = store.append(record.clone());
    store.persist()?;

    assert_eq!(new_len, before + 1);
    assert_eq!(store.len(), before + 1);
    assert_eq!(store.snapshot().last(), Some(&record));

    Ok(())
}

#[test]
fn test_update_changes_only_target_row() -> anyhow::Result<()> {
    let (mut store, _temp_dir) = create_test_store();
    for name in ["A", "B", "C"] {
        store.append(make_record(name, "Kinshasa"));
    }
    store.persist()?;
    let before = store.snapshot().to_vec();

    let replacement = make_record("B-updated", "Kasaï");
    store.update(1, replacement.clone())?;
    store.persist()?;

    let after = store.snapshot();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], replacement);
    assert_eq!(after[2], before[2]);

    let on_disk = CsvRecordStore::try_load(store.path())?;
    assert_eq!(on_disk.len(), 3);
    assert_eq!(on_disk[0], before[0]);
    assert_eq!(on_disk[1], replacement);
    assert_eq!(on_disk[2], before[2]);

    Ok(())
}

#[test]
fn test_delete_shifts_following_rows() -> anyhow::Result<()> {
    let (mut store, _temp_dir) = create_test_store();
    for name in ["A", "B", "C", "D"] {
        store.append(make_record(name, "Kinshasa"));
    }
    store.persist()?;
    let former_next = store.snapshot()[2].clone();

    let removed = store.delete(1)?;
    store.persist()?;

    assert_eq!(removed.name, "B");
    assert_eq!(store.len(), 3);
    assert_eq!(store.snapshot()[1], former_next);

    Ok(())
}

#[test]
fn test_out_of_range_indices_fail() -> anyhow::Result<()> {
    let (mut store, _temp_dir) = create_test_store();
    store.append(make_record("A", "Kinshasa"));

    let update = store.update(1, make_record("X", "Kinshasa"));
    assert!(matches!(
        update,
        Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
    ));

    let delete = store.delete(7);
    assert!(matches!(
        delete,
        Err(StoreError::IndexOutOfRange { index: 7, len: 1 })
    ));
    assert_eq!(store.snapshot()[0].name, "A");

    Ok(())
}
