use super::FilterCriteria;
use crate::model::Student;

/// Returns the students that satisfy every constraint in `criteria`, in input order.
pub fn apply<'a>(students: &'a [Student], criteria: &FilterCriteria) -> Vec<&'a Student> {
    let needle = criteria.search_text().map(str::to_lowercase);

    students
        .iter()
        .filter(|s| match &criteria.class_id {
            Some(class_id) => s.class_id.as_ref() == Some(class_id),
            None => true,
        })
        .filter(|s| match criteria.status {
            Some(status) => s.status == status,
            None => true,
        })
        .filter(|s| match &needle {
            Some(needle) => s.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassId, StudentStatus};
    use crate::source::memory::fixtures::sample_student;

    fn roster() -> Vec<Student> {
        vec![
            sample_student("1", "Ana Souza", "2012-01-10", StudentStatus::Active, Some(ClassId::new("a"))),
            sample_student("2", "Bruno Lima", "2011-05-02", StudentStatus::Inactive, Some(ClassId::new("b"))),
            sample_student("3", "Carla Ana", "2013-07-21", StudentStatus::Active, Some(ClassId::new("a"))),
            sample_student("4", "Diego", "2012-11-30", StudentStatus::Active, None),
        ]
    }

    fn ids(students: &[&Student]) -> Vec<String> {
        students.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let students = roster();
        let filtered = apply(&students, &FilterCriteria::default());
        assert_eq!(filtered.len(), students.len());
        assert!(filtered.iter().zip(&students).all(|(a, b)| *a == b));
    }

    #[test]
    fn class_filter_keeps_only_that_class() {
        let students = roster();
        let class = ClassId::new("a");
        let criteria = FilterCriteria {
            class_id: Some(class.clone()),
            ..Default::default()
        };
        let filtered = apply(&students, &criteria);
        let expected = students
            .iter()
            .filter(|s| s.class_id.as_ref() == Some(&class))
            .count();
        assert_eq!(filtered.len(), expected);
        assert!(filtered.iter().all(|s| s.class_id.as_ref() == Some(&class)));
    }

    #[test]
    fn status_filter() {
        let students = roster();
        let criteria = FilterCriteria {
            status: Some(StudentStatus::Inactive),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&students, &criteria)), vec!["2"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_of_name() {
        let students = roster();
        let criteria = FilterCriteria {
            search: Some("ANA".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&students, &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn all_constraints_must_hold() {
        let students = roster();
        let criteria = FilterCriteria {
            class_id: Some(ClassId::new("a")),
            status: Some(StudentStatus::Active),
            search: Some("carla".into()),
        };
        assert_eq!(ids(&apply(&students, &criteria)), vec!["3"]);
    }

    #[test]
    fn unassigned_students_never_match_a_class_filter() {
        let students = roster();
        let criteria = FilterCriteria {
            class_id: Some(ClassId::new("zzz")),
            ..Default::default()
        };
        assert!(apply(&students, &criteria).is_empty());
    }
}
