//! Filebay - in-memory file manager
//!
//! Wires the `filebay-core` state engine to the things a host provides:
//! confirmation prompts, transient notices, a filesystem picker and
//! YAML configuration. [`FileManagerDomain`] is the single entry point.

pub mod config;
pub mod domain;
pub mod message;
pub mod notice;
pub mod picker;
pub mod prompt;

pub use config::AppConfig;
pub use domain::{DragOutcome, FileManagerDomain, Reply, Snapshot};
pub use message::Message;
pub use notice::{Notice, NoticeKind, NoticeQueue};
pub use prompt::{AutoConfirm, DeleteTarget, Prompter, ScriptedPrompter};
