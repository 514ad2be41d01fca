use super::backend::StorageBackend;
use super::{DataStore, ImportMode, ImportReport};
use crate::error::{Result, ServzError};
use crate::model::{ServerFields, ServerId, ServerRecord};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

fn next_id(records: &[ServerRecord]) -> Result<ServerId> {
    match records.iter().filter_map(|r| r.id).max() {
        Some(max) => max.checked_add(1).ok_or_else(ids_exhausted),
        None => Ok(1),
    }
}

fn ids_exhausted() -> ServzError {
    ServzError::Store("Identifier space exhausted".to_string())
}

/// Collapse repeated identifiers inside one batch. The later entry wins but keeps the
/// position of the first occurrence.
fn dedupe_by_id(records: Vec<ServerRecord>) -> Vec<ServerRecord> {
    let mut out: Vec<ServerRecord> = Vec::with_capacity(records.len());
    let mut seen: HashMap<ServerId, usize> = HashMap::new();
    for record in records {
        match record.id.and_then(|id| seen.get(&id).copied()) {
            Some(idx) => out[idx] = record,
            None => {
                if let Some(id) = record.id {
                    seen.insert(id, out.len());
                }
                out.push(record);
            }
        }
    }
    out
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn list(&self) -> Result<Vec<ServerRecord>> {
        self.backend.load_records()
    }

    fn get(&self, id: ServerId) -> Result<ServerRecord> {
        self.backend
            .load_records()?
            .into_iter()
            .find(|r| r.id == Some(id))
            .ok_or(ServzError::NotFound(id))
    }

    fn create(&mut self, fields: ServerFields) -> Result<ServerRecord> {
        let mut records = self.backend.load_records()?;
        let record = ServerRecord::with_id(next_id(&records)?, fields);
        records.push(record.clone());
        self.backend.save_records(&records)?;
        debug!(id = ?record.id, "created record");
        Ok(record)
    }

    fn update(&mut self, record: &ServerRecord) -> Result<ServerRecord> {
        let id = record.id.ok_or_else(|| {
            ServzError::Validation("Cannot update a record without an identifier".to_string())
        })?;
        let mut records = self.backend.load_records()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or(ServzError::NotFound(id))?;
        slot.fields = record.fields.clone();
        let updated = slot.clone();
        self.backend.save_records(&records)?;
        debug!(id, "updated record");
        Ok(updated)
    }

    fn bulk_import(
        &mut self,
        records: Vec<ServerRecord>,
        mode: ImportMode,
    ) -> Result<ImportReport> {
        let incoming = dedupe_by_id(records);
        let existing = self.backend.load_records()?;
        let mut report = ImportReport::default();

        let mut merged = match mode {
            ImportMode::Merge => existing,
            ImportMode::Replace => {
                report.removed = existing.len();
                Vec::new()
            }
        };

        let mut index: HashMap<ServerId, usize> = merged
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.id.map(|id| (id, i)))
            .collect();

        // Identifier-less records are numbered after the whole batch is placed so a
        // fresh identifier never collides with one that appears later in the document.
        let mut unnumbered = Vec::new();
        for record in incoming {
            match record.id {
                Some(id) => match index.get(&id) {
                    Some(&idx) => {
                        merged[idx] = record;
                        report.replaced += 1;
                    }
                    None => {
                        index.insert(id, merged.len());
                        merged.push(record);
                        report.created += 1;
                    }
                },
                None => {
                    unnumbered.push(merged.len());
                    merged.push(record);
                    report.created += 1;
                }
            }
        }

        if let Some((&first, rest)) = unnumbered.split_first() {
            let mut id = next_id(&merged)?;
            merged[first].id = Some(id);
            for &idx in rest {
                id = id.checked_add(1).ok_or_else(ids_exhausted)?;
                merged[idx].id = Some(id);
            }
        }

        self.backend.save_records(&merged)?;
        debug!(
            created = report.created,
            replaced = report.replaced,
            removed = report.removed,
            "imported records"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> RecordStore<MemBackend> {
        RecordStore::with_backend(MemBackend::new())
    }

    fn named(name: &str) -> ServerFields {
        ServerFields::with_server_name(name)
    }

    fn ids(store: &RecordStore<MemBackend>) -> Vec<Option<ServerId>> {
        store.list().unwrap().iter().map(|r| r.id).collect()
    }

    // --- Create / Get ---

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = make_store();
        let a = store.create(named("db01")).unwrap();
        let b = store.create(named("db02")).unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_create_continues_after_highest_id() {
        let mut store = make_store();
        store
            .bulk_import(
                vec![ServerRecord::with_id(40, named("imported"))],
                ImportMode::Merge,
            )
            .unwrap();

        let created = store.create(named("db01")).unwrap();
        assert_eq!(created.id, Some(41));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut store = make_store();
        for name in ["c", "a", "b"] {
            store.create(named(name)).unwrap();
        }
        let names: Vec<String> = store
            .list()
            .unwrap()
            .iter()
            .map(|r| r.server_name().to_string())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_get_nonexistent_record_returns_not_found() {
        let store = make_store();
        assert!(matches!(store.get(7), Err(ServzError::NotFound(7))));
    }

    // --- Update ---

    #[test]
    fn test_update_overwrites_fields_in_place() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        let mut second = store.create(named("db02")).unwrap();
        store.create(named("db03")).unwrap();

        second.fields.standort = "Berlin".into();
        let updated = store.update(&second).unwrap();

        assert_eq!(updated, second);
        assert_eq!(store.get(2).unwrap().fields.standort, "Berlin");
        assert_eq!(ids(&store), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_update_missing_id_is_not_found_and_changes_nothing() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        let before = store.list().unwrap();

        let ghost = ServerRecord::with_id(99, named("ghost"));
        assert!(matches!(store.update(&ghost), Err(ServzError::NotFound(99))));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_update_without_id_is_rejected() {
        let mut store = make_store();
        let record = ServerRecord::new(named("db01"));
        assert!(matches!(store.update(&record), Err(ServzError::Validation(_))));
    }

    // --- Bulk Import ---

    #[test]
    fn test_merge_replaces_matching_and_appends_new() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        store.create(named("db02")).unwrap();

        let report = store
            .bulk_import(
                vec![
                    ServerRecord::with_id(2, named("db02-renamed")),
                    ServerRecord::with_id(10, named("db10")),
                ],
                ImportMode::Merge,
            )
            .unwrap();

        assert_eq!(report.replaced, 1);
        assert_eq!(report.created, 1);
        assert_eq!(report.removed, 0);
        assert_eq!(report.imported(), 2);
        assert_eq!(ids(&store), vec![Some(1), Some(2), Some(10)]);
        assert_eq!(store.get(2).unwrap().server_name(), "db02-renamed");
    }

    #[test]
    fn test_merge_numbers_records_without_id_after_the_batch() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();

        store
            .bulk_import(
                vec![
                    ServerRecord::new(named("fresh")),
                    ServerRecord::with_id(5, named("db05")),
                ],
                ImportMode::Merge,
            )
            .unwrap();

        // "fresh" keeps its document position but is numbered after id 5
        assert_eq!(ids(&store), vec![Some(1), Some(6), Some(5)]);
    }

    #[test]
    fn test_replace_discards_existing_collection() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        store.create(named("db02")).unwrap();

        let report = store
            .bulk_import(
                vec![ServerRecord::with_id(7, named("db07"))],
                ImportMode::Replace,
            )
            .unwrap();

        assert_eq!(report.removed, 2);
        assert_eq!(report.created, 1);
        assert_eq!(ids(&store), vec![Some(7)]);
    }

    #[test]
    fn test_repeated_id_in_batch_keeps_later_entry() {
        let mut store = make_store();
        store
            .bulk_import(
                vec![
                    ServerRecord::with_id(3, named("first")),
                    ServerRecord::with_id(4, named("other")),
                    ServerRecord::with_id(3, named("second")),
                ],
                ImportMode::Merge,
            )
            .unwrap();

        assert_eq!(ids(&store), vec![Some(3), Some(4)]);
        assert_eq!(store.get(3).unwrap().server_name(), "second");
    }

    #[test]
    fn test_import_saves_once() {
        let mut store = make_store();
        store
            .bulk_import(
                vec![
                    ServerRecord::new(named("a")),
                    ServerRecord::new(named("b")),
                    ServerRecord::new(named("c")),
                ],
                ImportMode::Merge,
            )
            .unwrap();
        assert_eq!(store.backend.save_count(), 1);
    }

    #[test]
    fn test_import_empty_batch_in_merge_mode_keeps_records() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        let report = store.bulk_import(Vec::new(), ImportMode::Merge).unwrap();
        assert_eq!(report, ImportReport::default());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_highest_possible_id_does_not_overflow() {
        let mut store = make_store();
        store
            .bulk_import(
                vec![ServerRecord::with_id(u64::MAX, named("big"))],
                ImportMode::Merge,
            )
            .unwrap();
        let before = store.list().unwrap();
        let saves = store.backend.save_count();

        assert!(matches!(store.create(named("db01")), Err(ServzError::Store(_))));
        assert!(matches!(
            store.bulk_import(vec![ServerRecord::new(named("fresh"))], ImportMode::Merge),
            Err(ServzError::Store(_))
        ));

        // records that bring their own id still import
        store
            .bulk_import(
                vec![ServerRecord::with_id(u64::MAX, named("big-renamed"))],
                ImportMode::Merge,
            )
            .unwrap();
        assert_eq!(store.backend.save_count(), saves + 1);
        assert_eq!(store.list().unwrap().len(), before.len());
        assert_eq!(store.get(u64::MAX).unwrap().server_name(), "big-renamed");
    }

    #[test]
    fn test_fresh_ids_stop_at_the_top_of_the_range() {
        let mut store = make_store();
        store
            .bulk_import(
                vec![ServerRecord::with_id(u64::MAX - 1, named("near"))],
                ImportMode::Merge,
            )
            .unwrap();
        let before = store.list().unwrap();

        let result = store.bulk_import(
            vec![ServerRecord::new(named("a")), ServerRecord::new(named("b"))],
            ImportMode::Merge,
        );
        assert!(matches!(result, Err(ServzError::Store(_))));
        assert_eq!(store.list().unwrap(), before);
    }

    // --- Error Handling ---

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let mut store = make_store();
        store.create(named("db01")).unwrap();
        let before = store.list().unwrap();

        store.backend.set_simulate_write_error(true);
        assert!(store.create(named("db02")).is_err());
        assert!(store
            .bulk_import(
                vec![ServerRecord::new(named("x"))],
                ImportMode::Replace
            )
            .is_err());

        store.backend.set_simulate_write_error(false);
        assert_eq!(store.list().unwrap(), before);
    }
}
