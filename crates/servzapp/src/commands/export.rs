use crate::document::ExportArtifact;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, file_name: &str) -> Result<ExportArtifact> {
    let records = store.list()?;
    ExportArtifact::render(&records, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{import_document, EXPORT_MEDIA_TYPE};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_export_renders_whole_collection() {
        let fixture = StoreFixture::new().with_servers(3);
        let artifact = run(&fixture.store, "inventory.yaml").unwrap();

        assert_eq!(artifact.file_name, "inventory.yaml");
        assert_eq!(artifact.media_type, EXPORT_MEDIA_TYPE);
        assert_eq!(artifact.record_count, 3);
        assert_eq!(
            import_document(&artifact.content).unwrap(),
            fixture.store.list().unwrap()
        );
    }

    #[test]
    fn test_export_empty_store() {
        let store = InMemoryStore::new();
        let artifact = run(&store, "servers.yaml").unwrap();
        assert_eq!(artifact.record_count, 0);
        assert!(import_document(&artifact.content).unwrap().is_empty());
    }
}
