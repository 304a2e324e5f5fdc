use wind_down::{OsMutex, WriteFile};

#[test]
fn basic_file_usage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut file = WriteFile::create(&path).unwrap();
    file.write(b"Hello, from Rust.").unwrap();

    let result = file.release();
    assert!(result.is_ok());
}

#[test]
fn basic_mutex_usage() {
    let mut mutex = OsMutex::init().unwrap();

    mutex.lock().unwrap();
    mutex.unlock().unwrap();

    // Scope exit destroys the unlocked primitive.
}
