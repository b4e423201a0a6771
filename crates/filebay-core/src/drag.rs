//! Drag-and-drop ingestion state machine
//!
//! Platforms fire one enter/leave pair per element boundary the cursor
//! crosses, so a drag over nested drop targets produces interleaved events
//! like `enter, enter, leave, enter, leave, leave`. Toggling the drop
//! affordance on each of them flickers. The machine below counts nesting
//! depth instead and only goes back to [`DragPhase::Idle`] when every enter
//! has been matched by a leave, or when the drag ends in a drop.
//!
//! Events whose data transfer does not declare a files payload (text or
//! link drags) are ignored entirely: no state change and no default-action
//! suppression.

use crate::record::FileBlob;

/// Data-transfer type platforms use for file payloads
pub const FILES_TRANSFER_TYPE: &str = "Files";

/// Check whether a data transfer's declared types include files
pub fn declares_files<S: AsRef<str>>(types: &[S]) -> bool {
    types.iter().any(|t| t.as_ref() == FILES_TRANSFER_TYPE)
}

/// Whether the drop affordance is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// A file drag is over the listening scope
    Active,
}

/// Raw drag notification from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Enter { has_files: bool },
    Over { has_files: bool },
    Leave { has_files: bool },
    Drop { has_files: bool, files: Vec<FileBlob> },
}

impl DragEvent {
    /// Whether the event carries a files payload
    pub fn has_files(&self) -> bool {
        match self {
            Self::Enter { has_files }
            | Self::Over { has_files }
            | Self::Leave { has_files }
            | Self::Drop { has_files, .. } => *has_files,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Enter { .. } => "enter",
            Self::Over { .. } => "over",
            Self::Leave { .. } => "leave",
            Self::Drop { .. } => "drop",
        }
    }
}

/// What the host has to do after an event was handled
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DragResponse {
    /// Suppress the platform's default handling (required for drops to work)
    pub prevent_default: bool,
    /// Dropped blobs to ingest; `None` unless a drop delivered at least one file
    pub dropped: Option<Vec<FileBlob>>,
}

impl DragResponse {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self {
            prevent_default: true,
            dropped: None,
        }
    }
}

/// Phase plus nesting depth; nothing else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragIngestion {
    phase: DragPhase,
    depth: u32,
}

impl DragIngestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == DragPhase::Active
    }

    /// Unmatched enter count
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Feed one platform event through the machine
    pub fn handle(&mut self, event: DragEvent) -> DragResponse {
        if !event.has_files() {
            log::trace!("DragIngestion: ignoring non-file {} event", event.name());
            return DragResponse::ignored();
        }

        match event {
            DragEvent::Enter { .. } => {
                // a fresh drag starts counting from scratch
                self.depth = match self.phase {
                    DragPhase::Idle => 1,
                    DragPhase::Active => self.depth.saturating_add(1),
                };
                self.set_phase(DragPhase::Active);
                DragResponse::ignored()
            }
            DragEvent::Over { .. } => DragResponse::handled(),
            DragEvent::Leave { .. } => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.set_phase(DragPhase::Idle);
                }
                DragResponse::ignored()
            }
            DragEvent::Drop { files, .. } => {
                self.depth = 0;
                self.set_phase(DragPhase::Idle);
                log::debug!("DragIngestion: drop delivered {} file(s)", files.len());
                DragResponse {
                    prevent_default: true,
                    dropped: (!files.is_empty()).then_some(files),
                }
            }
        }
    }

    /// User clicked the overlay: hide it regardless of depth.
    ///
    /// The stale depth is discarded by the next enter. Returns `true` if
    /// the affordance was showing.
    pub fn cancel(&mut self) -> bool {
        if self.phase == DragPhase::Idle {
            return false;
        }
        self.set_phase(DragPhase::Idle);
        true
    }

    fn set_phase(&mut self, phase: DragPhase) {
        if self.phase != phase {
            log::debug!(
                "DragIngestion: {:?} -> {:?} (depth {})",
                self.phase,
                phase,
                self.depth
            );
            self.phase = phase;
        }
    }
}
