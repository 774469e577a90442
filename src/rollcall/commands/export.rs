use crate::commands::{CmdMessage, CmdResult, ExportOutput};
use crate::error::Result;
use crate::export::{self, ExportFormat};
use crate::pipeline::FilterCriteria;
use crate::state::AppState;
use chrono::NaiveDate;

/// Exports the rows `filters` let through, in the current sort order.
pub fn run(
    state: &mut AppState,
    filters: FilterCriteria,
    format: ExportFormat,
    gzip: bool,
    today: NaiveDate,
) -> Result<CmdResult> {
    state.filters = filters;
    let rows = state.visible_rows(today);
    let rendered = export::render(format, &rows)?;

    let content = if gzip {
        export::gzip(rendered.as_bytes())?
    } else {
        rendered.into_bytes()
    };

    let output = ExportOutput {
        filename: format.default_filename(gzip),
        content,
        count: rows.len(),
    };

    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::warning("No students matched; export is empty."));
    }
    Ok(result.with_export(output))
}
