//! Application state.
//!
//! One explicit struct holds the last fetched roster together with the active
//! filter criteria and sort spec. The
//! indicator summary is cached here and only recomputed when the roster is
//! replaced; changing criteria never touches it.

use crate::age::calculate_age;
use crate::model::{Class, ClassId, Student, StudentId};
use crate::pipeline::{filter, indicators, sort, FilterCriteria, IndicatorSummary, SortSpec};
use chrono::NaiveDate;
use tracing::info;

/// A student ready for display, with the values derived from "today" and the
/// class list already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub student: Student,
    /// `None` when the birth date does not parse.
    pub age: Option<i32>,
    /// `None` when unassigned or the class is unknown.
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    students: Vec<Student>,
    classes: Vec<Class>,
    summary: IndicatorSummary,
    pub filters: FilterCriteria,
    pub sort: SortSpec,
}

impl AppState {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// Swaps in a freshly fetched roster and recomputes the indicators.
    pub fn replace_roster(&mut self, students: Vec<Student>, classes: Vec<Class>) {
        self.summary = indicators::summarize(&students, &classes);
        info!(
            students = self.summary.total,
            active = self.summary.active,
            classes = classes.len(),
            "roster refreshed"
        );
        self.students = students;
        self.classes = classes;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn summary(&self) -> &IndicatorSummary {
        &self.summary
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == id)
    }

    pub fn class(&self, id: &ClassId) -> Option<&Class> {
        self.classes.iter().find(|c| &c.id == id)
    }

    pub fn class_name(&self, id: Option<&ClassId>) -> Option<&str> {
        id.and_then(|id| self.class(id)).map(|c| c.name.as_str())
    }

    /// Filtered and sorted students under the current criteria.
    pub fn visible(&self, today: NaiveDate) -> Vec<&Student> {
        let filtered = filter::apply(&self.students, &self.filters);
        sort::apply(&filtered, self.sort, today)
    }

    pub fn visible_rows(&self, today: NaiveDate) -> Vec<StudentRow> {
        self.visible(today)
            .into_iter()
            .map(|s| StudentRow {
                age: calculate_age(&s.birth_date, today).ok(),
                class_name: self.class_name(s.class_id.as_ref()).map(str::to_string),
                student: s.clone(),
            })
            .collect()
    }
}
