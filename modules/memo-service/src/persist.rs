//! JSON file persistence for the memo collection.
//!
//! The whole collection lives in one document and is rewritten on every
//! mutation. Writes go to a sibling `.tmp` file first and are renamed over
//! the target, so readers never see a half-written document.

use memo_types::{Memo, MemoFile};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct MemoFileRef<'a> {
    memos: &'a [Memo],
}

/// Read the collection from `path`.
///
/// A missing, unreadable or unparsable file yields an empty collection.
pub fn load(path: &Path) -> Vec<Memo> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No memo file at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Failed to read {}: {}; starting empty", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<MemoFile>(&data) {
        Ok(file) => file.memos,
        Err(e) => {
            log::warn!("Memo file {} is corrupt ({}); starting empty", path.display(), e);
            Vec::new()
        }
    }
}

/// Overwrite `path` with the full collection.
pub fn save(path: &Path, memos: &[Memo]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&MemoFileRef { memos })
        .map_err(|e| format!("Failed to serialize memos: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(|e| format!("Failed to write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        format!("Failed to replace {}: {}", path.display(), e)
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("memos.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
