use servzapp::model::{ServerFields, ServerRecord};
use servzapp::store::backend::StorageBackend;
use servzapp::store::fs_backend::{FsBackend, DATA_FILE};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let data_dir = TempDir::new().unwrap();
    let backend = FsBackend::new(data_dir.path().to_path_buf());
    (data_dir, backend)
}

fn record(id: u64, name: &str) -> ServerRecord {
    let mut fields = ServerFields::with_server_name(name);
    fields.standort = "Berlin".to_string();
    ServerRecord::with_id(id, fields)
}

#[test]
fn test_fs_backend_empty_when_never_written() {
    let (_dir, backend) = setup();
    assert!(backend.load_records().unwrap().is_empty());
}

#[test]
fn test_fs_backend_save_and_load() {
    let (_dir, backend) = setup();
    let records = vec![record(1, "db01"), record(2, "db02")];

    backend.save_records(&records).unwrap();
    assert_eq!(backend.load_records().unwrap(), records);

    // second save replaces, not appends
    backend.save_records(&records[..1]).unwrap();
    assert_eq!(backend.load_records().unwrap(), records[..1].to_vec());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.save_records(&[record(1, "db01")]).unwrap();

    let expected_path = dir.path().join(DATA_FILE);
    assert!(expected_path.exists());
    assert_eq!(backend.location(), expected_path);

    let on_disk = fs::read_to_string(&expected_path).unwrap();
    assert!(on_disk.contains("\"serverName\": \"db01\""));

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_corrupt_file_is_an_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join(DATA_FILE), "{ not json").unwrap();
    assert!(backend.load_records().is_err());
}

#[test]
fn test_fs_backend_failed_rename_removes_tmp_file() {
    let (dir, backend) = setup();
    // a non-empty directory where the data file belongs makes the rename fail
    let blocker = dir.path().join(DATA_FILE);
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    assert!(backend.save_records(&[record(1, "db01")]).is_err());

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![DATA_FILE.to_string()]);
}
