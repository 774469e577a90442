use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RollcallError, Result};
use crate::model::StudentId;
use crate::source::RosterSource;
use crate::state::AppState;

pub fn run<S: RosterSource>(source: &mut S, state: &AppState, id: &StudentId) -> Result<CmdResult> {
    let student = state
        .student(id)
        .ok_or_else(|| RollcallError::StudentNotFound(id.clone()))?;

    source.delete_student(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Student deleted: {}", student.name)));
    Ok(result)
}
