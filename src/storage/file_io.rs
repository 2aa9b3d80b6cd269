//! Account file reads and crash-safe writes
//!
//! A save serializes into `<name>.json.tmp` beside the target, syncs it and
//! renames it over the target, so a reader sees either the old account or
//! the new one.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CheckbookError, CheckbookResult};

fn storage_error(action: &str, path: &Path, err: io::Error) -> CheckbookError {
    CheckbookError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read and parse a JSON file that must exist
///
/// A missing file is `NotFound`; content that does not parse as `T` is
/// `MalformedData`.
pub fn read_json_required<T: DeserializeOwned>(path: &Path) -> CheckbookResult<T> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CheckbookError::NotFound(path.to_path_buf()),
        _ => storage_error("read", path, e),
    })?;

    serde_json::from_str(&text)
        .map_err(|e| CheckbookError::MalformedData(format!("{}: {}", path.display(), e)))
}

/// Temp file that is removed again unless the write completes
struct PendingWrite {
    temp: PathBuf,
    committed: bool,
}

impl PendingWrite {
    fn beside(target: &Path) -> Self {
        Self {
            temp: target.with_extension("json.tmp"),
            committed: false,
        }
    }

    fn commit(mut self, target: &Path) -> CheckbookResult<()> {
        fs::rename(&self.temp, target).map_err(|e| storage_error("replace", target, e))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PendingWrite {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp);
        }
    }
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// Missing parent directories are created first.
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> CheckbookResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    let pending = PendingWrite::beside(path);
    let file = File::create(&pending.temp).map_err(|e| storage_error("create", &pending.temp, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| CheckbookError::Storage(format!("Failed to serialize account: {}", e)))?;
    writer
        .write_all(b"\n")
        .map_err(|e| storage_error("write", &pending.temp, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| storage_error("write", &pending.temp, e.into_error()))?;
    file.sync_all()
        .map_err(|e| storage_error("sync", &pending.temp, e))?;

    pending.commit(path)
}
