use crate::commands::CmdResult;
use crate::error::Result;
use crate::pipeline::FilterCriteria;
use crate::state::AppState;
use chrono::NaiveDate;

/// Makes `filters` the active criteria and lists what they let through.
pub fn run(state: &mut AppState, filters: FilterCriteria, today: NaiveDate) -> Result<CmdResult> {
    state.filters = filters;
    Ok(CmdResult::default().with_listed_students(state.visible_rows(today)))
}
