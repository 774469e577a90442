use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentDraft;
use crate::source::RosterSource;
use crate::validation::validate_draft;
use chrono::NaiveDate;

pub fn run<S: RosterSource>(source: &mut S, draft: StudentDraft, today: NaiveDate) -> Result<CmdResult> {
    let draft = draft.normalized();
    validate_draft(&draft, today)?;
    source.create_student(&draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Student created: {}", draft.name)));
    Ok(result)
}
