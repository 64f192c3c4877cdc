#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

pub const CATALOG_ARGS: [&str; 4] = ["catalog.xml", "catalog.xsd", "artists.xslt", "artists.xml"];

/// Byte-for-byte result of `artists.xslt` applied to `catalog.xml`.
pub const EXPECTED_ARTISTS: &str = "<?xml version=\"1.0\"?>\n\
<artists><artist>\nArtist Bob Dylan born in USA</artist>\
<artist>\nArtist Bonnie Tyler born in UK</artist>\
<artist>\nArtist Dolly Parton born in USA</artist></artists>\n";

static ENGINE_LOCK: Mutex<()> = Mutex::new(());

/// libxml2 keeps global parser state; run engine calls one test at a time.
pub fn engine_lock() -> MutexGuard<'static, ()> {
    ENGINE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog")
}

/// A temporary directory seeded with the catalog fixtures.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        for entry in fs::read_dir(fixtures_dir()).expect("read fixtures") {
            let entry = entry.expect("fixture entry");
            fs::copy(entry.path(), dir.path().join(entry.file_name())).expect("copy fixture");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.file(name)).expect("read file")
    }
}

/// Makes `name` unreadable. Returns `false` when permission bits are not
/// enforced (running as root), in which case the caller should skip.
#[cfg(unix)]
pub fn lock_file(ws: &Workspace, name: &str) -> bool {
    use std::os::unix::fs::PermissionsExt;

    let path = ws.file(name);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).expect("chmod");
    fs::File::open(&path).is_err()
}

/// Text of every `<artist>` element in a transformation result.
pub fn artist_lines(result: &str) -> Vec<String> {
    result
        .split("<artist>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</artist>").next())
        .map(|text| text.trim().to_string())
        .collect()
}
