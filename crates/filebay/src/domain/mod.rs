//! Domain layer for filebay
//!
//! Owns every piece of core state and is the only thing the presentation
//! layer talks to:
//!
//! - Inbound commands (add, delete, select, filter/sort, preview, drag)
//!   run to completion one at a time, in arrival order
//! - Outbound state (view, statistics, selection, drag phase, preview,
//!   type options, notices) is re-derived on every read
//!
//! Deletions go through the injected [`Prompter`] before touching state;
//! a declined prompt leaves everything as it was.

mod seed;

pub use seed::demo_records;

use std::collections::HashSet;
use std::time::Duration;

use filebay_core::{
    Clock, Collection, DragEvent, DragIngestion, FileBlob, FileId, FileOpError, FileOpResult,
    FileRecord, HandleTable, PreviewState, SelectionSet, SortKey, ViewMode, ViewQuery, ViewStats,
};
use serde::Serialize;

use crate::config::AppConfig;
use crate::message::Message;
use crate::notice::{Notice, NoticeKind, NoticeQueue};
use crate::prompt::{DeleteTarget, Prompter};

/// Result of a drag event after the domain handled it
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DragOutcome {
    /// Host must suppress the platform's default handling
    pub prevent_default: bool,
    /// Ids of records ingested from a drop
    pub ingested: Vec<FileId>,
}

/// What [`FileManagerDomain::update`] did
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// State changed (or was already as requested); nothing to report
    Done,
    /// Records were ingested
    Added(Vec<FileId>),
    /// This many records were deleted
    Removed(usize),
    /// Selection state of the toggled record afterwards
    Selected(bool),
    /// Drag event handled
    Drag(DragOutcome),
}

/// Everything the presentation layer renders, in one serializable value
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub view: Vec<&'a FileRecord>,
    pub stats: ViewStats<'a>,
    pub selected: Vec<FileId>,
    pub drag_active: bool,
    pub preview: Option<&'a FileRecord>,
    pub preview_handle: Option<&'a str>,
    pub types: Vec<&'a str>,
    pub view_mode: ViewMode,
    pub query: &'a ViewQuery,
    pub notices: &'a [Notice],
}

/// Domain layer for the file manager
pub struct FileManagerDomain<P: Prompter> {
    // ═══════════════════════════════════════════════════════════════════════
    // Records
    // ═══════════════════════════════════════════════════════════════════════
    /// Authoritative record list
    collection: Collection,

    /// Ticked records
    selection: SelectionSet,

    // ═══════════════════════════════════════════════════════════════════════
    // View State
    // ═══════════════════════════════════════════════════════════════════════
    /// Search, type filter and ordering
    query: ViewQuery,

    /// Cards or table
    view_mode: ViewMode,

    /// Record open for preview
    preview: PreviewState,

    /// Display handles minted for previews
    handles: HandleTable,

    // ═══════════════════════════════════════════════════════════════════════
    // Ingestion & Feedback
    // ═══════════════════════════════════════════════════════════════════════
    /// Window-level drag tracking
    drag: DragIngestion,

    /// Pending notices
    notices: NoticeQueue,

    // ═══════════════════════════════════════════════════════════════════════
    // Collaborators
    // ═══════════════════════════════════════════════════════════════════════
    prompter: P,
    clock: Box<dyn Clock>,
}

impl<P: Prompter> std::fmt::Debug for FileManagerDomain<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileManagerDomain")
            .field("records", &self.collection.len())
            .field("selected", &self.selection.len())
            .field("query", &self.query)
            .field("view_mode", &self.view_mode)
            .field("preview", &self.preview.target())
            .field("drag", &self.drag.phase())
            .finish_non_exhaustive()
    }
}

impl<P: Prompter> FileManagerDomain<P> {
    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a domain from configuration
    pub fn new(config: &AppConfig, prompter: P, clock: Box<dyn Clock>) -> Self {
        let seed = if config.seed_demo_files {
            demo_records(clock.now())
        } else {
            Vec::new()
        };
        let mut domain = Self::with_records(seed, prompter, clock);
        domain.query.sort_by = config.view.sort_by;
        domain.query.sort_dir = config.view.sort_dir;
        domain.view_mode = config.view.mode;
        domain.notices = NoticeQueue::new(Duration::from_millis(config.notice_duration_ms));
        domain
    }

    /// Create a domain over an explicit set of pre-existing records
    pub fn with_records(records: Vec<FileRecord>, prompter: P, clock: Box<dyn Clock>) -> Self {
        let collection = Collection::with_seed(records);
        log::info!("FileManagerDomain: starting with {} record(s)", collection.len());
        Self {
            collection,
            selection: SelectionSet::new(),
            query: ViewQuery::default(),
            view_mode: ViewMode::default(),
            preview: PreviewState::new(),
            handles: HandleTable::new(),
            drag: DragIngestion::new(),
            notices: NoticeQueue::default(),
            prompter,
            clock,
        }
    }

    /// Dispatch one inbound message
    pub fn update(&mut self, message: Message) -> FileOpResult<Reply> {
        let result = match message {
            Message::AddFiles(blobs) => self.request_add_files(blobs).map(Reply::Added),
            Message::Delete(id) => self.request_delete(id).map(|()| Reply::Removed(1)),
            Message::DeleteSelected => self.request_delete_selected().map(Reply::Removed),
            Message::Download(id) => self.request_download(id).map(|()| Reply::Done),
            Message::ToggleSelect(id) => self.request_toggle_select(id).map(Reply::Selected),
            Message::SetSearch(text) => {
                self.set_search_query(text);
                Ok(Reply::Done)
            }
            Message::SetTypeFilter(mime) => {
                self.set_type_filter(mime);
                Ok(Reply::Done)
            }
            Message::SetSortBy(key) => {
                self.set_sort_by(key);
                Ok(Reply::Done)
            }
            Message::ToggleSortDirection => {
                self.toggle_sort_direction();
                Ok(Reply::Done)
            }
            Message::SetViewMode(mode) => {
                self.set_view_mode(mode);
                Ok(Reply::Done)
            }
            Message::OpenPreview(id) => self.open_preview(id).map(|()| Reply::Done),
            Message::ClosePreview => {
                self.close_preview();
                Ok(Reply::Done)
            }
            Message::Drag(event) => Ok(Reply::Drag(self.handle_drag_event(event))),
            Message::CancelDrag => {
                self.cancel_drag();
                Ok(Reply::Done)
            }
            Message::DismissNotice(id) => {
                self.notices.dismiss(id);
                Ok(Reply::Done)
            }
        };
        if let Err(e) = &result {
            log::debug!("FileManagerDomain: no change: {}", e);
        }
        result
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Collection Commands
    // ═══════════════════════════════════════════════════════════════════════

    /// Ingest blobs from the picker or a drop.
    ///
    /// Queues an "Added: N" notice. An empty batch is rejected with
    /// [`FileOpError::EmptyBatch`] and has no effect at all; a batch the id
    /// space cannot hold is rejected with an error notice.
    pub fn request_add_files(&mut self, blobs: Vec<FileBlob>) -> FileOpResult<Vec<FileId>> {
        if blobs.is_empty() {
            return Err(FileOpError::EmptyBatch);
        }
        let now = self.clock.now();
        let ids: Vec<FileId> = match self.collection.add_batch(blobs, now) {
            Ok(added) => added.iter().map(|r| r.id).collect(),
            Err(e) => {
                log::error!("Ingestion failed: {}", e);
                self.notices.show(e.to_string(), NoticeKind::Error);
                return Err(e);
            }
        };

        log::info!(
            "Ingested {} file(s), collection now holds {}",
            ids.len(),
            self.collection.len()
        );
        self.notices
            .show(format!("Added: {}", ids.len()), NoticeKind::Success);
        Ok(ids)
    }

    /// Delete one record after the user confirms.
    ///
    /// Also unselects it and closes its preview (releasing the display
    /// handle before the record's payload is dropped).
    pub fn request_delete(&mut self, id: FileId) -> FileOpResult<()> {
        let record = self.collection.get(id).ok_or(FileOpError::NotFound(id))?;
        let target = DeleteTarget::Single {
            id,
            name: record.name.clone(),
        };
        if !self.prompter.confirm(&target) {
            log::info!("Delete of {} declined", id);
            return Err(FileOpError::UserDeclined);
        }

        self.preview.close_if_target(id, &mut self.handles);
        if let Some(removed) = self.collection.remove_one(id) {
            log::info!("Deleted \"{}\" ({})", removed.name, id);
        }
        self.selection.remove(id);
        Ok(())
    }

    /// Delete every selected record after one confirmation.
    ///
    /// Returns how many records were removed. The whole selection is
    /// cleared, including ids that no longer matched a record.
    pub fn request_delete_selected(&mut self) -> FileOpResult<usize> {
        if self.selection.is_empty() {
            return Err(FileOpError::EmptyBatch);
        }
        let ids = self.selection.sorted_ids();
        let names = ids
            .iter()
            .filter_map(|id| self.collection.get(*id))
            .map(|r| r.name.clone())
            .collect();
        let target = DeleteTarget::Selected { ids, names };
        if !self.prompter.confirm(&target) {
            log::info!("Delete of {} selected record(s) declined", target.ids().len());
            return Err(FileOpError::UserDeclined);
        }

        let doomed: HashSet<FileId> = target.ids().into_iter().collect();
        if let Some(previewed) = self.preview.target() {
            if doomed.contains(&previewed) {
                self.preview.close(&mut self.handles);
            }
        }
        let removed = self.collection.remove_many(&doomed);
        self.selection.clear();
        log::info!("Deleted {} selected record(s)", removed);
        Ok(removed)
    }

    /// Simulated download: only acknowledges the request
    pub fn request_download(&mut self, id: FileId) -> FileOpResult<()> {
        let record = self.collection.get(id).ok_or(FileOpError::NotFound(id))?;
        let message = format!("Downloading file: {}", record.name);
        self.prompter.acknowledge(&message);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Selection
    // ═══════════════════════════════════════════════════════════════════════

    /// Toggle selection of a live record; returns whether it is now selected
    pub fn request_toggle_select(&mut self, id: FileId) -> FileOpResult<bool> {
        if !self.collection.contains(id) {
            return Err(FileOpError::NotFound(id));
        }
        let selected = self.selection.toggle(id);
        log::debug!("Selection: {} {}", id, if selected { "on" } else { "off" });
        Ok(selected)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // View State
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_search_query(&mut self, text: String) {
        log::debug!("View: search {:?}", text);
        self.query.search = text;
    }

    /// Set the type filter; an empty string clears it
    pub fn set_type_filter(&mut self, mime: Option<String>) {
        let mime = mime.filter(|m| !m.is_empty());
        log::debug!("View: type filter {:?}", mime);
        self.query.type_filter = mime;
    }

    pub fn set_sort_by(&mut self, key: SortKey) {
        log::debug!("View: sort by {:?}", key);
        self.query.sort_by = key;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.query.sort_dir = self.query.sort_dir.toggled();
        log::debug!("View: sort direction {:?}", self.query.sort_dir);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        log::debug!("View: mode {:?}", mode);
        self.view_mode = mode;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Preview
    // ═══════════════════════════════════════════════════════════════════════

    pub fn open_preview(&mut self, id: FileId) -> FileOpResult<()> {
        let record = self.collection.get(id).ok_or(FileOpError::NotFound(id))?;
        self.preview.open(record, &mut self.handles);
        log::debug!("Preview: open {}", id);
        Ok(())
    }

    pub fn close_preview(&mut self) {
        self.preview.close(&mut self.handles);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Drag and Drop
    // ═══════════════════════════════════════════════════════════════════════

    /// Run a platform drag event through the ingestion machine.
    ///
    /// A drop that carries files ingests them exactly like the picker path.
    pub fn handle_drag_event(&mut self, event: DragEvent) -> DragOutcome {
        let response = self.drag.handle(event);
        let ingested = match response.dropped {
            Some(blobs) => self.request_add_files(blobs).unwrap_or_default(),
            None => Vec::new(),
        };
        DragOutcome {
            prevent_default: response.prevent_default,
            ingested,
        }
    }

    /// Click on the drop overlay
    pub fn cancel_drag(&mut self) {
        if self.drag.cancel() {
            log::debug!("Drag: cancelled by click");
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Outbound State
    // ═══════════════════════════════════════════════════════════════════════

    /// Current filtered, sorted view
    pub fn view(&self) -> Vec<&FileRecord> {
        self.query.project(self.collection.iter())
    }

    /// Footer statistics of the current view
    pub fn stats(&self) -> ViewStats<'_> {
        ViewStats::from_view(&self.view())
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag.is_active()
    }

    /// Record currently open for preview
    pub fn preview_record(&self) -> Option<&FileRecord> {
        self.preview
            .target()
            .and_then(|id| self.collection.get(id))
    }

    /// Display handle of the preview, for image records with content
    pub fn preview_handle(&self) -> Option<&str> {
        self.preview.handle().map(|h| h.as_str())
    }

    /// Display handles not yet released
    pub fn live_handle_count(&self) -> usize {
        self.handles.live_count()
    }

    /// Type filter options, from the whole collection
    pub fn distinct_types(&self) -> Vec<&str> {
        self.collection.distinct_types()
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.pending()
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Everything the presentation layer needs for one render
    pub fn snapshot(&self) -> Snapshot<'_> {
        let view = self.view();
        let stats = ViewStats::from_view(&view);
        Snapshot {
            view,
            stats,
            selected: self.selection.sorted_ids(),
            drag_active: self.drag.is_active(),
            preview: self.preview_record(),
            preview_handle: self.preview_handle(),
            types: self.distinct_types(),
            view_mode: self.view_mode,
            query: &self.query,
            notices: self.notices.pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use chrono::{TimeZone, Utc};
    use filebay_core::collection::MAX_ID;
    use filebay_core::{FixedClock, SortDirection, OCTET_STREAM};
    use std::rc::Rc;

    fn clock() -> Rc<FixedClock> {
        Rc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
        ))
    }

    fn domain_with(answers: Vec<bool>) -> (FileManagerDomain<ScriptedPrompter>, Rc<FixedClock>) {
        let clock = clock();
        let domain = FileManagerDomain::new(
            &AppConfig::default(),
            ScriptedPrompter::new(answers),
            Box::new(clock.clone()),
        );
        (domain, clock)
    }

    fn blob(name: &str, size: usize, mime: &str) -> FileBlob {
        FileBlob::new(name, mime, vec![7; size])
    }

    fn view_ids<P: Prompter>(domain: &FileManagerDomain<P>) -> Vec<FileId> {
        domain.view().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_seeded_start() {
        let (domain, _) = domain_with(vec![]);
        assert_eq!(domain.collection().len(), 2);
        assert_eq!(domain.view_mode(), ViewMode::Cards);
        assert_eq!(domain.distinct_types(), vec!["application/pdf", "image/jpeg"]);
    }

    #[test]
    fn test_add_single_blob() {
        let (mut domain, _) = domain_with(vec![]);
        let ids = domain.request_add_files(vec![blob("a.txt", 10, "")]).unwrap();

        assert_eq!(domain.collection().len(), 3);
        let first = &domain.collection().records()[0];
        assert_eq!(first.id, ids[0]);
        assert_eq!(first.mime, OCTET_STREAM);
        assert_eq!(domain.notices().len(), 1);
        assert_eq!(domain.notices()[0].message, "Added: 1");
        assert_eq!(domain.notices()[0].kind, NoticeKind::Success);
    }

    #[test]
    fn test_empty_add_has_no_effect() {
        let (mut domain, _) = domain_with(vec![]);
        assert_eq!(
            domain.request_add_files(Vec::new()),
            Err(FileOpError::EmptyBatch)
        );
        assert_eq!(domain.collection().len(), 2);
        assert!(domain.notices().is_empty());
    }

    #[test]
    fn test_repeated_batches_in_same_tick_get_fresh_ids() {
        let (mut domain, _) = domain_with(vec![]);
        let first = domain
            .request_add_files(vec![blob("a", 1, ""), blob("b", 1, "")])
            .unwrap();
        let second = domain.request_add_files(vec![blob("c", 1, "")]).unwrap();
        let all: HashSet<FileId> = domain.collection().iter().map(|r| r.id).collect();
        assert_eq!(all.len(), 5);
        assert!(second[0] > first[1]);
    }

    #[test]
    fn test_pdf_type_filter_stats() {
        let (mut domain, _) = domain_with(vec![]);
        domain.set_type_filter(Some("application/pdf".to_string()));
        let stats = domain.stats();
        assert_eq!(stats.total_files, 1);
        assert_eq!(stats.pdf_count, 1);
        assert_eq!(stats.image_count, 0);
        assert_eq!(stats.other_count, 0);

        domain.set_type_filter(Some(String::new()));
        assert_eq!(domain.query().type_filter, None);
        assert_eq!(domain.stats().total_files, 2);
    }

    #[test]
    fn test_delete_selected_clears_selection_and_preview() {
        let (mut domain, _) = domain_with(vec![true]);
        domain.request_toggle_select(FileId(2)).unwrap();
        domain.open_preview(FileId(2)).unwrap();

        assert_eq!(domain.request_delete_selected(), Ok(1));
        assert!(domain.selection().is_empty());
        assert!(domain.preview_record().is_none());
        assert_eq!(domain.collection().len(), 1);
        assert!(matches!(
            domain.prompter().asked[0],
            DeleteTarget::Selected { .. }
        ));
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let (mut domain, _) = domain_with(vec![false, false]);
        domain.request_toggle_select(FileId(1)).unwrap();
        domain.open_preview(FileId(1)).unwrap();

        assert_eq!(domain.request_delete(FileId(1)), Err(FileOpError::UserDeclined));
        assert_eq!(
            domain.request_delete_selected(),
            Err(FileOpError::UserDeclined)
        );
        assert_eq!(domain.collection().len(), 2);
        assert!(domain.selection().is_selected(FileId(1)));
        assert_eq!(domain.preview_record().map(|r| r.id), Some(FileId(1)));
    }

    #[test]
    fn test_retry_after_declined_delete() {
        let (mut domain, _) = domain_with(vec![false]);
        assert_eq!(domain.request_delete(FileId(2)), Err(FileOpError::UserDeclined));

        domain.prompter_mut().push_answer(true);
        assert_eq!(domain.request_delete(FileId(2)), Ok(()));
        assert!(!domain.collection().contains(FileId(2)));
        assert_eq!(domain.prompter().asked.len(), 2);
    }

    #[test]
    fn test_bulk_prompt_lists_selected_names() {
        let (mut domain, _) = domain_with(vec![false]);
        domain.request_toggle_select(FileId(1)).unwrap();
        domain.request_toggle_select(FileId(2)).unwrap();
        let _ = domain.request_delete_selected();

        let DeleteTarget::Selected { ids, names } = &domain.prompter().asked[0] else {
            panic!("expected a bulk prompt");
        };
        assert_eq!(ids, &vec![FileId(1), FileId(2)]);
        assert_eq!(names, &vec!["Документ.pdf".to_string(), "Фото.jpg".to_string()]);
    }

    #[test]
    fn test_add_rejected_when_ids_run_out() {
        let record = FileRecord::seed(FileId(MAX_ID), "last.bin", 1, "", clock().now());
        let mut domain =
            FileManagerDomain::with_records(vec![record], ScriptedPrompter::default(), Box::new(clock()));

        assert_eq!(
            domain.request_add_files(vec![blob("a.txt", 1, "")]),
            Err(FileOpError::IdsExhausted)
        );
        assert_eq!(domain.collection().len(), 1);
        assert_eq!(domain.notices().len(), 1);
        assert_eq!(domain.notices()[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_delete_unknown_id_skips_prompt() {
        let (mut domain, _) = domain_with(vec![true]);
        assert_eq!(
            domain.request_delete(FileId(404)),
            Err(FileOpError::NotFound(FileId(404)))
        );
        assert!(domain.prompter().asked.is_empty());
    }

    #[test]
    fn test_delete_selected_with_nothing_selected() {
        let (mut domain, _) = domain_with(vec![true]);
        assert_eq!(domain.request_delete_selected(), Err(FileOpError::EmptyBatch));
        assert!(domain.prompter().asked.is_empty());
    }

    #[test]
    fn test_single_delete_keeps_other_selections() {
        let (mut domain, _) = domain_with(vec![true]);
        domain.request_toggle_select(FileId(1)).unwrap();
        domain.request_toggle_select(FileId(2)).unwrap();

        domain.request_delete(FileId(1)).unwrap();
        assert_eq!(domain.selection().sorted_ids(), vec![FileId(2)]);
        for id in domain.selection().ids() {
            assert!(domain.collection().contains(*id));
        }
    }

    #[test]
    fn test_deleting_previewed_image_releases_handle() {
        let (mut domain, _) = domain_with(vec![true]);
        let ids = domain
            .request_add_files(vec![blob("cat.png", 16, "image/png")])
            .unwrap();
        domain.open_preview(ids[0]).unwrap();
        assert!(domain.preview_handle().is_some());
        assert_eq!(domain.live_handle_count(), 1);

        domain.request_delete(ids[0]).unwrap();
        assert!(domain.preview_record().is_none());
        assert_eq!(domain.live_handle_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let (mut domain, _) = domain_with(vec![]);
        assert_eq!(
            domain.request_toggle_select(FileId(9)),
            Err(FileOpError::NotFound(FileId(9)))
        );
        assert!(domain.selection().is_empty());
    }

    #[test]
    fn test_download_acknowledges() {
        let (mut domain, _) = domain_with(vec![]);
        domain.request_download(FileId(1)).unwrap();
        assert_eq!(
            domain.prompter().acknowledged,
            vec!["Downloading file: Документ.pdf".to_string()]
        );
        assert_eq!(
            domain.request_download(FileId(3)),
            Err(FileOpError::NotFound(FileId(3)))
        );
    }

    #[test]
    fn test_sorting_commands() {
        let (mut domain, _) = domain_with(vec![]);
        domain.set_sort_by(SortKey::Size);
        assert_eq!(view_ids(&domain), vec![FileId(1), FileId(2)]);
        domain.toggle_sort_direction();
        assert_eq!(domain.query().sort_dir, SortDirection::Descending);
        assert_eq!(view_ids(&domain), vec![FileId(2), FileId(1)]);

        domain.set_sort_by(SortKey::CreatedAt);
        assert_eq!(view_ids(&domain), vec![FileId(1), FileId(2)]);
    }

    #[test]
    fn test_view_mode_does_not_change_view() {
        let (mut domain, _) = domain_with(vec![]);
        let before = view_ids(&domain);
        domain.set_view_mode(ViewMode::Table);
        assert_eq!(view_ids(&domain), before);
    }

    #[test]
    fn test_drop_ingests_through_add_path() {
        let (mut domain, clock) = domain_with(vec![]);
        clock.advance(chrono::Duration::seconds(5));

        domain.handle_drag_event(DragEvent::Enter { has_files: true });
        domain.handle_drag_event(DragEvent::Leave { has_files: true });
        domain.handle_drag_event(DragEvent::Enter { has_files: true });
        assert!(domain.is_drag_active());

        let outcome = domain.handle_drag_event(DragEvent::Drop {
            has_files: true,
            files: vec![blob("dropped.pdf", 3, "application/pdf")],
        });
        assert!(outcome.prevent_default);
        assert_eq!(outcome.ingested.len(), 1);
        assert!(!domain.is_drag_active());
        assert_eq!(domain.collection().len(), 3);
        assert_eq!(domain.collection().records()[0].created_at, clock.now());
    }

    #[test]
    fn test_empty_drop_does_not_ingest() {
        let (mut domain, _) = domain_with(vec![]);
        domain.handle_drag_event(DragEvent::Enter { has_files: true });
        let outcome = domain.handle_drag_event(DragEvent::Drop {
            has_files: true,
            files: Vec::new(),
        });
        assert!(outcome.ingested.is_empty());
        assert!(!domain.is_drag_active());
        assert_eq!(domain.collection().len(), 2);
        assert!(domain.notices().is_empty());
    }

    #[test]
    fn test_update_dispatch() {
        let (mut domain, _) = domain_with(vec![true]);
        let reply = domain
            .update(Message::AddFiles(vec![blob("x.txt", 2, "text/plain")]))
            .unwrap();
        let Reply::Added(ids) = reply else {
            panic!("expected Added, got {:?}", reply);
        };

        assert_eq!(
            domain.update(Message::ToggleSelect(ids[0])),
            Ok(Reply::Selected(true))
        );
        assert_eq!(domain.update(Message::DeleteSelected), Ok(Reply::Removed(1)));
        assert_eq!(
            domain.update(Message::Delete(ids[0])),
            Err(FileOpError::NotFound(ids[0]))
        );

        domain.update(Message::Drag(DragEvent::Enter { has_files: true })).unwrap();
        domain.update(Message::CancelDrag).unwrap();
        assert!(!domain.is_drag_active());

        let notice_id = domain.notices()[0].id;
        domain.update(Message::DismissNotice(notice_id)).unwrap();
        assert!(domain.notices().is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let (mut domain, _) = domain_with(vec![]);
        domain.request_toggle_select(FileId(2)).unwrap();
        let json = serde_json::to_value(domain.snapshot()).unwrap();
        assert_eq!(json["view"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["stats"]["total_files"], 2);
        assert_eq!(json["selected"][0], 2);
        assert_eq!(json["drag_active"], false);
        assert_eq!(json["view_mode"], "cards");
    }

    #[test]
    fn test_config_without_seed() {
        let config = AppConfig {
            seed_demo_files: false,
            ..Default::default()
        };
        let domain = FileManagerDomain::new(&config, ScriptedPrompter::default(), Box::new(clock()));
        assert!(domain.collection().is_empty());
        assert_eq!(domain.stats().average_size, 0.0);
    }
}
