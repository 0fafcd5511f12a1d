//! Per-user notification inbox.
//!
//! Newest-first list capped at [`INBOX_CAP`] entries; the oldest entries
//! beyond the cap are discarded, not archived. The store is a pure inbox -
//! delivery and deduplication live in the push-messaging subsystem that
//! feeds it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use golden_fig_core::NotificationId;

/// Maximum number of entries kept per user.
pub const INBOX_CAP: usize = 100;

/// A notification inbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique id; generated when the source does not supply one.
    pub id: NotificationId,
    /// Short headline.
    pub title: String,
    /// Message body.
    pub body: String,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user has seen it.
    pub read: bool,
    /// Arbitrary payload from the delivery source (deep link, order id, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// Input for [`crate::store::CommerceStore::add_notification`].
///
/// Missing fields get defaults on insertion: a generated [`NotificationId`],
/// `created_at` of now, and an empty payload.
#[derive(Debug, Clone, Default)]
pub struct NotificationDraft {
    /// Short headline.
    pub title: String,
    /// Message body.
    pub body: String,
    /// Explicit id, e.g. the push message id; generated when absent.
    pub id: Option<NotificationId>,
    /// Explicit creation time; defaults to now.
    pub created_at: Option<DateTime<Utc>>,
    /// Arbitrary payload.
    pub data: Option<Map<String, Value>>,
}

impl NotificationDraft {
    /// Create a draft with just a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// Pin the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Resolve the draft into a full entry, filling defaults. Unread.
    #[must_use]
    pub fn into_notification(self) -> Notification {
        Notification {
            id: self.id.unwrap_or_else(NotificationId::generate),
            title: self.title,
            body: self.body,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            read: false,
            data: self.data.unwrap_or_default(),
        }
    }
}

/// Prepend `entry` and truncate to the cap.
#[must_use]
pub fn push(inbox: &[Notification], entry: Notification) -> Vec<Notification> {
    let mut next = Vec::with_capacity((inbox.len() + 1).min(INBOX_CAP));
    next.push(entry);
    next.extend(inbox.iter().take(INBOX_CAP - 1).cloned());
    next
}

/// Mark every entry read.
#[must_use]
pub fn mark_all_read(inbox: &[Notification]) -> Vec<Notification> {
    inbox
        .iter()
        .map(|n| Notification {
            read: true,
            ..n.clone()
        })
        .collect()
}

/// Count of unread entries.
#[must_use]
pub fn unread_count(inbox: &[Notification]) -> usize {
    inbox.iter().filter(|n| !n.read).count()
}
