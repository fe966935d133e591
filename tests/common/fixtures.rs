//! Test fixtures: temporary data directories and stub ingestion scripts.
//!
//! Each test gets its own directory laid out the way the external
//! pipeline leaves it: metadata.json at the root, rejected/, incoming/
//! and processed/ beneath it.

use ingest_gateway::metadata::{FileRecord, FileStatus};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A stub script standing in for the real ingestion pipeline: exits 0
/// without touching anything.
pub const STUB_EXIT_0: &str = "#!/bin/sh\nexit 0\n";

/// A stub that runs and reports failure.
pub const STUB_EXIT_1: &str = "#!/bin/sh\nexit 1\n";

/// A stub slow enough for two requests to overlap on it.
pub const STUB_SLOW_EXIT_0: &str = "#!/bin/sh\nsleep 0.3\nexit 0\n";

pub struct TestDataDir {
    dir: TempDir,
}

impl TestDataDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp data dir");
        for sub in ["rejected", "incoming", "processed"] {
            fs::create_dir(dir.path().join(sub)).expect("Failed to create data subdir");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.path().join("metadata.json")
    }

    pub fn rejected_dir(&self) -> PathBuf {
        self.dir.path().join("rejected")
    }

    pub fn incoming_dir(&self) -> PathBuf {
        self.dir.path().join("incoming")
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.dir.path().join("processed")
    }

    /// Write the metadata file the way the pipeline does.
    pub fn write_metadata(&self, records: &[FileRecord]) {
        fs::write(
            self.metadata_path(),
            serde_json::to_string_pretty(records).unwrap(),
        )
        .unwrap();
    }

    /// Write arbitrary (possibly broken) metadata content.
    pub fn write_raw_metadata(&self, content: &str) {
        fs::write(self.metadata_path(), content).unwrap();
    }

    pub fn add_rejected_file(&self, filename: &str, content: &str) {
        fs::write(self.rejected_dir().join(filename), content).unwrap();
    }

    /// Write an executable stub standing in for the ingestion pipeline.
    pub fn write_stub_pipeline(&self, script: &str) -> PathBuf {
        let path = self.dir.path().join("ingest.sh");
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    /// Stub that behaves like the real pipeline for a single file: moves
    /// it from incoming to processed and rewrites the metadata record.
    pub fn consuming_stub_script(&self, filename: &str) -> String {
        let root = self.path().display();
        format!(
            "#!/bin/sh\n\
             mv \"{root}/incoming/{filename}\" \"{root}/processed/{filename}\"\n\
             cat > \"{root}/metadata.json\" <<'EOF'\n\
             [{{\"filename\":\"{filename}\",\"size\":6,\"sha256\":\"{sha}\",\
             \"status\":\"processed\",\"reason\":\"\",\
             \"path\":\"{root}/processed/{filename}\"}}]\n\
             EOF\n\
             exit 0\n",
            root = root,
            filename = filename,
            sha = "a".repeat(64),
        )
    }
}

pub fn rejected_record(filename: &str) -> FileRecord {
    FileRecord {
        filename: filename.to_string(),
        size: 120,
        sha256: "b".repeat(64),
        status: FileStatus::Rejected,
        reason: "invalid file format: (file is not of CSV format)".to_string(),
        path: format!("rejected/{}", filename),
    }
}

pub fn processed_record(filename: &str) -> FileRecord {
    FileRecord {
        filename: filename.to_string(),
        size: 240,
        sha256: "c".repeat(64),
        status: FileStatus::Processed,
        reason: String::new(),
        path: format!("processed/{}", filename),
    }
}
