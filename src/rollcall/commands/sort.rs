use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pipeline::{SortField, SortSpec};
use crate::prefs::SortPreferences;
use crate::state::AppState;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    Show,
    /// Switch to the field and flip the current order.
    Toggle(SortField),
    Set(SortSpec),
}

pub fn run<K: KeyValueStore>(
    state: &mut AppState,
    prefs: &mut SortPreferences<K>,
    action: SortAction,
) -> Result<CmdResult> {
    let next = match action {
        SortAction::Show => {
            let mut result = CmdResult::default().with_sort(state.sort);
            result.add_message(CmdMessage::info(format!("Sorted by {}", state.sort)));
            return Ok(result);
        }
        SortAction::Toggle(field) => state.sort.toggled(field),
        SortAction::Set(spec) => spec,
    };

    state.sort = next;
    prefs.save(next)?;

    let mut result = CmdResult::default().with_sort(next);
    result.add_message(CmdMessage::success(format!("Sorting by {}", next)));
    Ok(result)
}
