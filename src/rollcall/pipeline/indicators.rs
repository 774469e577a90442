use crate::model::{Class, ClassId, Student};
use std::collections::BTreeMap;

/// Headline counts over the whole roster, independent of any filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorSummary {
    pub total: usize,
    pub active: usize,
    /// Every known class appears, including those with no students.
    pub per_class: BTreeMap<ClassId, usize>,
}

impl IndicatorSummary {
    pub fn class_count(&self, class_id: &ClassId) -> usize {
        self.per_class.get(class_id).copied().unwrap_or(0)
    }
}

/// References to classes not in `classes` are left out of `per_class` but
/// still counted in `total` and `active`.
pub fn summarize(students: &[Student], classes: &[Class]) -> IndicatorSummary {
    let mut per_class: BTreeMap<ClassId, usize> =
        classes.iter().map(|c| (c.id.clone(), 0)).collect();

    for class_id in students.iter().filter_map(|s| s.class_id.as_ref()) {
        if let Some(count) = per_class.get_mut(class_id) {
            *count += 1;
        }
    }

    IndicatorSummary {
        total: students.len(),
        active: students.iter().filter(|s| s.is_active()).count(),
        per_class,
    }
}
