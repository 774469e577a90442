use super::{SortField, SortOrder, SortSpec};
use crate::age::calculate_age;
use crate::model::Student;
use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum SortKey {
    Name(String),
    /// `None` when the birth date does not parse.
    Age(Option<i32>),
}

fn sort_key(student: &Student, field: SortField, today: NaiveDate) -> SortKey {
    match field {
        SortField::Name => SortKey::Name(student.name.to_lowercase()),
        SortField::Age => SortKey::Age(calculate_age(&student.birth_date, today).ok()),
    }
}

fn directed(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    }
}

fn compare(a: &SortKey, b: &SortKey, order: SortOrder) -> Ordering {
    match (a, b) {
        (SortKey::Name(a), SortKey::Name(b)) => directed(a.cmp(b), order),
        (SortKey::Age(Some(a)), SortKey::Age(Some(b))) => directed(a.cmp(b), order),
        // Unknown ages go last whatever the direction.
        (SortKey::Age(Some(_)), SortKey::Age(None)) => Ordering::Less,
        (SortKey::Age(None), SortKey::Age(Some(_))) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Orders `students` by `spec` into a new vector. Equal keys keep their input order.
pub fn apply<'a>(students: &[&'a Student], spec: SortSpec, today: NaiveDate) -> Vec<&'a Student> {
    let mut keyed: Vec<(SortKey, &'a Student)> = students
        .iter()
        .map(|s| (sort_key(s, spec.field, today), *s))
        .collect();

    // `sort_by` is stable.
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, spec.order));

    keyed.into_iter().map(|(_, s)| s).collect()
}
