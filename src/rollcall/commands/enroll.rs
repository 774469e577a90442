use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RollcallError, Result};
use crate::model::{ClassId, StudentId};
use crate::source::RosterSource;
use crate::state::AppState;

/// Enrolls a student in a class, refusing when the class is at capacity.
pub fn run<S: RosterSource>(
    source: &mut S,
    state: &AppState,
    student_id: &StudentId,
    class_id: &ClassId,
) -> Result<CmdResult> {
    let student = state
        .student(student_id)
        .ok_or_else(|| RollcallError::StudentNotFound(student_id.clone()))?;
    let class = state
        .class(class_id)
        .ok_or_else(|| RollcallError::ClassNotFound(class_id.clone()))?;

    let mut result = CmdResult::default();
    if student.class_id.as_ref() == Some(class_id) {
        result.add_message(CmdMessage::info(format!(
            "{} is already in {}",
            student.name, class.name
        )));
        return Ok(result);
    }

    if let Some(capacity) = class.seat_limit() {
        if state.summary().class_count(class_id) >= capacity as usize {
            return Err(RollcallError::ClassFull(class.name.clone()));
        }
    }

    source.enroll(student_id, class_id)?;

    result.add_message(CmdMessage::success(format!(
        "{} enrolled in {}",
        student.name, class.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SortSpec;
    use crate::source::memory::fixtures::RosterFixture;
    use crate::source::memory::InMemorySource;

    fn state_of(source: &InMemorySource) -> AppState {
        let mut state = AppState::new(SortSpec::default());
        state.replace_roster(source.students().to_vec(), source.classes().to_vec());
        state
    }

    #[test]
    fn enrolls_into_open_class() {
        let mut source = RosterFixture::school().build();
        let state = state_of(&source);

        let result = run(&mut source, &state, &StudentId::new("4"), &ClassId::new("1b")).unwrap();
        assert_eq!(result.messages[0].content, "Davi Rocha enrolled in Year 1 B");
    }

    #[test]
    fn full_class_is_refused() {
        // 1a holds two students and has capacity 2.
        let mut source = RosterFixture::school().build();
        let state = state_of(&source);

        let err = run(&mut source, &state, &StudentId::new("4"), &ClassId::new("1a")).unwrap_err();
        assert!(matches!(err, RollcallError::ClassFull(ref name) if name == "Year 1 A"));
        let davi = source.students().iter().find(|s| s.id.as_str() == "4").unwrap();
        assert_eq!(davi.class_id, None);
    }

    #[test]
    fn zero_capacity_means_no_limit() {
        let mut source = RosterFixture::school().with_class("lab", "Lab", Some(0)).build();
        let state = state_of(&source);

        let result = run(&mut source, &state, &StudentId::new("4"), &ClassId::new("lab")).unwrap();
        assert_eq!(result.messages[0].content, "Davi Rocha enrolled in Lab");
        let davi = source.students().iter().find(|s| s.id.as_str() == "4").unwrap();
        assert_eq!(davi.class_id, Some(ClassId::new("lab")));
    }

    #[test]
    fn unknown_class_is_an_error() {
        let mut source = RosterFixture::school().build();
        let state = state_of(&source);
        let err = run(&mut source, &state, &StudentId::new("4"), &ClassId::new("9z")).unwrap_err();
        assert!(matches!(err, RollcallError::ClassNotFound(_)));
    }

    #[test]
    fn already_enrolled_is_a_no_op_even_when_full() {
        let mut source = RosterFixture::school().build();
        let state = state_of(&source);
        let result = run(&mut source, &state, &StudentId::new("1"), &ClassId::new("1a")).unwrap();
        assert_eq!(result.messages[0].content, "Bruno Lima is already in Year 1 A");
    }
}
