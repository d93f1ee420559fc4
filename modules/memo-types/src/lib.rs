//! Shared types for the memo service and its HTTP clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A single memo as returned by the API and stored on disk.
///
/// Field order here is the field order of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memo {
    /// Build a fresh memo from a payload. Both timestamps are set to `now`.
    pub fn new(id: String, payload: MemoPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title.unwrap_or_default(),
            content: payload.content.unwrap_or_default(),
            tags: payload.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-editable field with the payload. `id` and
    /// `created_at` are kept.
    pub fn replace(&mut self, payload: MemoPayload, now: DateTime<Utc>) {
        self.title = payload.title.unwrap_or_default();
        self.content = payload.content.unwrap_or_default();
        self.tags = payload.tags.unwrap_or_default();
        self.updated_at = now.max(self.updated_at);
    }
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /memos` and `PUT /memos/{id}`.
///
/// Every field may be missing or `null`. The server-owned fields (`id`,
/// `created_at`, `updated_at`) must still have the record's types, but their
/// values are never used. Unknown keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoPayload {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MemoPayload {
    /// Decode a request body. A bare JSON `null` is an empty payload.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice::<Option<Self>>(body).map(Option::unwrap_or_default)
    }
}

// =====================================================
// Storage Types
// =====================================================

/// On-disk document: `{ "memos": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoFile {
    #[serde(default)]
    pub memos: Vec<Memo>,
}
