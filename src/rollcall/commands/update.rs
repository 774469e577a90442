use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RollcallError, Result};
use crate::model::{StudentId, StudentPatch};
use crate::source::RosterSource;
use crate::state::AppState;
use crate::validation::validate_draft;
use chrono::NaiveDate;

/// Merges `patch` over the stored record and submits the full record, the way
/// a pre-filled edit form would.
pub fn run<S: RosterSource>(
    source: &mut S,
    state: &AppState,
    id: &StudentId,
    patch: StudentPatch,
    today: NaiveDate,
) -> Result<CmdResult> {
    let current = state
        .student(id)
        .ok_or_else(|| RollcallError::StudentNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let draft = patch.apply(current);
    validate_draft(&draft, today)?;
    source.update_student(id, &draft)?;

    result.add_message(CmdMessage::success(format!("Student updated: {}", draft.name)));
    Ok(result)
}
