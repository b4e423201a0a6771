//! Filebay Core - file collection state engine
//!
//! Pure state and derivations behind the filebay file manager:
//!
//! - **Records**: [`FileRecord`] model, MIME classification, size/date formatting
//! - **Collection**: the authoritative record list (ingest, remove, distinct types)
//! - **View**: filter + stable sort projection and footer statistics
//! - **Selection**: ticked record ids
//! - **Drag**: nesting-aware drag-and-drop ingestion state machine
//! - **Preview**: preview target and its releasable display handle
//!
//! Nothing here touches the platform; the `filebay` crate wires it to
//! confirmation prompts, notices and the filesystem.

pub mod clock;
pub mod collection;
pub mod config;
pub mod drag;
pub mod error;
pub mod preview;
pub mod record;
pub mod selection;
pub mod types;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::Collection;
pub use drag::{DragEvent, DragIngestion, DragPhase, DragResponse};
pub use error::{FileOpError, FileOpResult};
pub use preview::{DisplayHandle, HandleTable, PreviewState};
pub use record::{FileBlob, FileKind, FileRecord};
pub use selection::SelectionSet;
pub use types::*;
pub use view::{ViewQuery, ViewStats};
