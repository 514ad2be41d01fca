use super::mem_backend::MemBackend;
use super::record_store::RecordStore;

pub type InMemoryStore = RecordStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RecordStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ServerFields;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_servers(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut fields = ServerFields::with_server_name(format!("db{:02}", i + 1));
                fields.standort = "Berlin".to_string();
                self.store.create(fields).unwrap();
            }
            self
        }

        /// Adds a server with the given name and `(key, value)` field pairs.
        pub fn with_server(mut self, name: &str, fields: &[(&str, &str)]) -> Self {
            let mut record = ServerFields::with_server_name(name);
            for (key, value) in fields {
                record.set(key, *value).unwrap();
            }
            self.store.create(record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::ServzError;
    use crate::store::DataStore;

    #[test]
    fn test_fixture_with_servers() {
        let fixture = StoreFixture::new().with_servers(3);
        let records = fixture.store.list().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].server_name(), "db03");
        assert_eq!(records[2].id, Some(3));
    }

    #[test]
    fn test_fixture_with_server_fields() {
        let fixture = StoreFixture::new()
            .with_server("db01", &[("kunde", "Acme"), ("dbms", "PostgreSQL")]);
        let record = fixture.store.get(1).unwrap();
        assert_eq!(record.fields.kunde, "Acme");
        assert_eq!(record.fields.dbms, "PostgreSQL");
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::default();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.get(1), Err(ServzError::NotFound(1))));
    }
}
