//! Test helpers for writing plan request files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding a plan request.
#[derive(Debug)]
pub(super) struct RequestFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl RequestFile {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("request.json");
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn write(&self, contents: &str) {
        write_utf8(&self.path, contents.as_bytes());
    }
}

pub(super) const THREE_SITES: &str = r#"{
    "start": { "lat": 0.0, "lng": 0.0 },
    "sites": [
        { "id": "far", "name": "Block C", "latitude": "0", "longitude": "3" },
        { "id": "blank", "latitude": null, "longitude": "1" },
        { "id": "near", "name": "Block A", "latitude": "0", "longitude": "1" },
        { "id": "middle", "latitude": " 0 ", "longitude": "2" }
    ]
}"#;
