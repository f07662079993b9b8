//! Admin collection editor state, generic over the record type.
//!
//! DESIGN
//! ======
//! Pages own one `RwSignal<EditorState<R>>`. Every mutation runs in two
//! halves: a `begin_*` call that checks and raises the in-flight flag, then a
//! `finish_*` call with the request outcome. Requests never start while the
//! matching flag is up, so double clicks cannot submit twice.
//!
//! Deletes go through `request_delete` → `confirm_delete`; nothing is
//! removed until the confirmed request succeeds.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use records::{EditableRecord, RecordDraft, Toggle, ValidationError};

/// Which record the open form writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// A validated write ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveRequest<D> {
    Create(D),
    Update { id: String, draft: D },
}

/// Outcome of `begin_save`.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveAttempt<D> {
    /// No form open, or a save is already in flight.
    Blocked,
    Invalid(ValidationError),
    Ready(SaveRequest<D>),
}

#[derive(Clone)]
pub struct EditorState<R: EditableRecord> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<FormMode>,
    pub draft: R::Draft,
    pub validation: Option<ValidationError>,
    pub saving: bool,
    pub pending_delete: Option<String>,
    reload_pending: bool,
    deleting: Vec<String>,
    toggling: Vec<(String, Toggle)>,
}

impl<R: EditableRecord> Default for EditorState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            form: None,
            draft: R::Draft::default(),
            validation: None,
            saving: false,
            pending_delete: None,
            reload_pending: false,
            deleting: Vec::new(),
            toggling: Vec::new(),
        }
    }
}

impl<R: EditableRecord> EditorState<R> {
    // =========================================================================
    // LIST
    // =========================================================================

    /// Start a list fetch. Returns `false` if one is already running; the
    /// running fetch is then owed a follow-up via `take_reload`.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            self.reload_pending = true;
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply a list fetch. On failure the previous rows stay visible.
    ///
    /// # Errors
    ///
    /// Passes the fetch error through for the caller's toast.
    pub fn finish_load(&mut self, result: Result<Vec<R>, String>) -> Result<(), String> {
        self.loading = false;
        match result {
            Ok(mut rows) => {
                rows.sort_by_key(EditableRecord::display_order);
                self.items = rows;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Claim a refused `begin_load` after `finish_load`. Returns `true` and
    /// marks the list loading again when another fetch is owed.
    pub fn take_reload(&mut self) -> bool {
        if !self.reload_pending || self.loading {
            return false;
        }
        self.reload_pending = false;
        self.loading = true;
        self.error = None;
        true
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|r| r.id() == id)
    }

    // =========================================================================
    // FORM
    // =========================================================================

    pub fn open_create(&mut self) {
        self.form = Some(FormMode::Create);
        self.draft = R::Draft::default();
        self.validation = None;
    }

    /// Open the form on an existing row. Returns `false` for unknown ids.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(draft) = self.find(id).map(EditableRecord::to_draft) else {
            return false;
        };
        self.form = Some(FormMode::Edit(id.to_owned()));
        self.draft = draft;
        self.validation = None;
        true
    }

    pub fn close_form(&mut self) {
        if self.saving {
            return;
        }
        self.form = None;
        self.draft = R::Draft::default();
        self.validation = None;
    }

    /// Mutate the draft. Clears a stale validation message.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut R::Draft)) {
        edit(&mut self.draft);
        self.validation = None;
    }

    /// Validate the draft and raise the save flag.
    pub fn begin_save(&mut self) -> SaveAttempt<R::Draft> {
        if self.saving {
            return SaveAttempt::Blocked;
        }
        let Some(mode) = self.form.clone() else {
            return SaveAttempt::Blocked;
        };
        if let Err(e) = self.draft.validate() {
            self.validation = Some(e.clone());
            return SaveAttempt::Invalid(e);
        }
        self.saving = true;
        let draft = self.draft.clone();
        SaveAttempt::Ready(match mode {
            FormMode::Create => SaveRequest::Create(draft),
            FormMode::Edit(id) => SaveRequest::Update { id, draft },
        })
    }

    /// Apply a save outcome. Success closes the form; failure keeps it open.
    ///
    /// # Errors
    ///
    /// Passes the request error through for the caller's toast.
    pub fn finish_save(&mut self, result: Result<R, String>) -> Result<(), String> {
        self.saving = false;
        let saved = result?;
        self.upsert(saved);
        self.form = None;
        self.draft = R::Draft::default();
        Ok(())
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        if self.find(id).is_some() {
            self.pending_delete = Some(id.to_owned());
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete and raise its flag.
    /// Returns the id to delete, or `None` if nothing was pending.
    pub fn confirm_delete(&mut self) -> Option<String> {
        let id = self.pending_delete.take()?;
        if self.is_deleting(&id) {
            return None;
        }
        self.deleting.push(id.clone());
        Some(id)
    }

    /// Apply a delete outcome.
    ///
    /// # Errors
    ///
    /// Passes the request error through; the row stays in the list.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), String>) -> Result<(), String> {
        self.deleting.retain(|d| d != id);
        result?;
        self.items.retain(|r| r.id() != id);
        if self.form == Some(FormMode::Edit(id.to_owned())) {
            self.form = None;
            self.draft = R::Draft::default();
        }
        Ok(())
    }

    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.iter().any(|d| d == id)
    }

    // =========================================================================
    // TOGGLES
    // =========================================================================

    /// Raise the flag for one toggle on one row.
    /// Returns `false` if unsupported, unknown, or already in flight.
    pub fn begin_toggle(&mut self, id: &str, toggle: Toggle) -> bool {
        if !R::TOGGLES.contains(&toggle) || self.find(id).is_none() || self.is_toggling(id, toggle) {
            return false;
        }
        self.toggling.push((id.to_owned(), toggle));
        true
    }

    /// Apply a toggle outcome. Callers re-fetch the list after success.
    ///
    /// # Errors
    ///
    /// Passes the request error through for the caller's toast.
    pub fn finish_toggle(&mut self, id: &str, toggle: Toggle, result: Result<R, String>) -> Result<(), String> {
        self.toggling.retain(|(t_id, t)| !(t_id == id && *t == toggle));
        self.upsert(result?);
        Ok(())
    }

    #[must_use]
    pub fn is_toggling(&self, id: &str, toggle: Toggle) -> bool {
        self.toggling.iter().any(|(t_id, t)| t_id == id && *t == toggle)
    }

    fn upsert(&mut self, record: R) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        } else {
            self.items.push(record);
        }
        self.items.sort_by_key(EditableRecord::display_order);
    }
}
