//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every rollcall operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the data source, the sort preferences and the [`AppState`]
//! - **Dispatches** to the appropriate command function
//! - **Refreshes** the roster after every successful mutation, classes first,
//!   so the indicator summary always reflects what the backend holds. A failed
//!   reload does not undo the saved change; it becomes a warning on the result
//!
//! It does no printing and no formatting; callers receive `CmdResult`s.
//!
//! ## Generic Over the Boundaries
//!
//! `RollcallApi<S: RosterSource, K: KeyValueStore>`:
//! - Production: `RollcallApi<HttpSource, FileKvStore>`
//! - Testing: `RollcallApi<InMemorySource, InMemoryKvStore>`
//!
//! Configuration is not routed through here: it is read before a source can be
//! built. See [`commands::config`].

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::model::{ClassId, StudentDraft, StudentId, StudentPatch};
use crate::pipeline::FilterCriteria;
use crate::prefs::SortPreferences;
use crate::source::RosterSource;
use crate::state::AppState;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use tracing::warn;

pub use crate::commands::sort::SortAction;
pub use crate::commands::{CmdMessage, MessageLevel};

pub struct RollcallApi<S: RosterSource, K: KeyValueStore> {
    source: S,
    prefs: SortPreferences<K>,
    state: AppState,
}

impl<S: RosterSource, K: KeyValueStore> RollcallApi<S, K> {
    /// Restores the saved sort spec. The roster stays empty until [`refresh`](Self::refresh).
    pub fn new(source: S, store: K) -> Self {
        let prefs = SortPreferences::new(store);
        let state = AppState::new(prefs.load());
        Self {
            source,
            prefs,
            state,
        }
    }

    pub fn refresh(&mut self) -> Result<()> {
        let classes = self.source.fetch_classes()?;
        let students = self.source.fetch_students()?;
        self.state.replace_roster(students, classes);
        Ok(())
    }

    pub fn list_students(&mut self, filters: FilterCriteria, today: NaiveDate) -> Result<CmdResult> {
        commands::list::run(&mut self.state, filters, today)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.state)
    }

    pub fn sort(&mut self, action: SortAction) -> Result<CmdResult> {
        commands::sort::run(&mut self.state, &mut self.prefs, action)
    }

    pub fn create_student(&mut self, draft: StudentDraft, today: NaiveDate) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.source, draft, today)?;
        Ok(self.refreshed(result))
    }

    pub fn update_student(
        &mut self,
        id: &StudentId,
        patch: StudentPatch,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.source, &self.state, id, patch, today)?;
        Ok(self.refreshed(result))
    }

    pub fn delete_student(&mut self, id: &StudentId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.source, &self.state, id)?;
        Ok(self.refreshed(result))
    }

    pub fn enroll(&mut self, student_id: &StudentId, class_id: &ClassId) -> Result<CmdResult> {
        let result = commands::enroll::run(&mut self.source, &self.state, student_id, class_id)?;
        Ok(self.refreshed(result))
    }

    /// The mutation already reached the backend, so a reload failure is
    /// reported alongside the result instead of replacing it.
    fn refreshed(&mut self, mut result: CmdResult) -> CmdResult {
        if let Err(e) = self.refresh() {
            warn!(error = %e, "roster reload failed after a saved change");
            result.add_message(CmdMessage::warning(format!(
                "Change saved, but the roster could not be reloaded: {}",
                e
            )));
        }
        result
    }

    pub fn export(
        &mut self,
        filters: FilterCriteria,
        format: ExportFormat,
        gzip: bool,
        today: NaiveDate,
    ) -> Result<CmdResult> {
        commands::export::run(&mut self.state, filters, format, gzip, today)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
