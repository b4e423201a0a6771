//! Transient user notices (toasts)
//!
//! The domain only queues notices. Showing them and dismissing them after
//! their duration is the presentation layer's job.

use std::time::Duration;

use serde::Serialize;

/// Visual flavour of a notice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    /// Suggested on-screen time
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Ordered queue of pending notices
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    next_id: u64,
    default_duration: Duration,
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            next_id: 1,
            default_duration,
            pending: Vec::new(),
        }
    }

    /// Queue a notice with the default duration; returns its id
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> u64 {
        self.show_for(message, kind, self.default_duration)
    }

    /// Queue a notice with an explicit duration
    pub fn show_for(&mut self, message: impl Into<String>, kind: NoticeKind, duration: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Notice {
            id,
            message: message.into(),
            kind,
            duration,
        });
        id
    }

    /// Remove a notice; returns `false` if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|n| n.id != id);
        self.pending.len() != before
    }

    /// Pending notices, oldest first
    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(2600))
    }
}
