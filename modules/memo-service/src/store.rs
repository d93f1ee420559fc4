//! In-memory memo collection backed by a JSON file.

use crate::persist;
use chrono::Utc;
use memo_types::{Memo, MemoPayload};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Ordered memo collection. Every mutation holds the lock across the
/// in-memory change and the file rewrite, so writes are serialized.
///
/// If the rewrite fails the in-memory change is kept and the error is
/// returned; memory and disk disagree until the next successful save.
pub struct MemoStore {
    path: PathBuf,
    memos: Mutex<Vec<Memo>>,
}

impl MemoStore {
    /// Load the collection from `path`, or start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let memos = persist::load(&path);
        Self {
            path,
            memos: Mutex::new(memos),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.memos.lock().len()
    }

    pub fn list(&self) -> Vec<Memo> {
        self.memos.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<Memo> {
        self.memos.lock().iter().find(|m| m.id == id).cloned()
    }

    pub fn create(&self, payload: MemoPayload) -> Result<Memo, String> {
        let memo = Memo::new(uuid::Uuid::new_v4().to_string(), payload, Utc::now());

        let mut memos = self.memos.lock();
        memos.push(memo.clone());
        persist::save(&self.path, &memos)?;
        Ok(memo)
    }

    /// Returns `Ok(None)` when no memo has this id.
    pub fn update(&self, id: &str, payload: MemoPayload) -> Result<Option<Memo>, String> {
        let mut memos = self.memos.lock();
        let Some(memo) = memos.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        memo.replace(payload, Utc::now());
        let updated = memo.clone();

        persist::save(&self.path, &memos)?;
        Ok(Some(updated))
    }

    /// Returns `Ok(false)` when no memo has this id.
    pub fn delete(&self, id: &str) -> Result<bool, String> {
        let mut memos = self.memos.lock();
        let Some(pos) = memos.iter().position(|m| m.id == id) else {
            return Ok(false);
        };
        memos.remove(pos);

        persist::save(&self.path, &memos)?;
        Ok(true)
    }
}
