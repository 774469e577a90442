use super::RosterSource;
use crate::error::{RollcallError, Result};
use crate::model::{Class, ClassId, Student, StudentDraft, StudentId};

/// In-process roster for testing and development.
/// Behaves like a well-mannered backend: ids are assigned on create, unknown
/// ids are rejected.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    students: Vec<Student>,
    classes: Vec<Class>,
    next_id: u64,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(students: Vec<Student>, classes: Vec<Class>) -> Self {
        Self {
            students,
            classes,
            next_id: 0,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    fn allocate_id(&mut self) -> StudentId {
        loop {
            self.next_id += 1;
            let candidate = StudentId::new(self.next_id.to_string());
            if !self.students.iter().any(|s| s.id == candidate) {
                return candidate;
            }
        }
    }

    fn find_mut(&mut self, id: &StudentId) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| RollcallError::StudentNotFound(id.clone()))
    }
}

impl RosterSource for InMemorySource {
    fn fetch_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn fetch_classes(&self) -> Result<Vec<Class>> {
        Ok(self.classes.clone())
    }

    fn create_student(&mut self, draft: &StudentDraft) -> Result<()> {
        let id = self.allocate_id();
        self.students.push(Student {
            id,
            name: draft.name.clone(),
            birth_date: draft.birth_date.clone(),
            email: draft.email.clone(),
            status: draft.status,
            class_id: draft.class_id.clone(),
        });
        Ok(())
    }

    fn update_student(&mut self, id: &StudentId, draft: &StudentDraft) -> Result<()> {
        let student = self.find_mut(id)?;
        student.name = draft.name.clone();
        student.birth_date = draft.birth_date.clone();
        student.email = draft.email.clone();
        student.status = draft.status;
        student.class_id = draft.class_id.clone();
        Ok(())
    }

    fn delete_student(&mut self, id: &StudentId) -> Result<()> {
        let before = self.students.len();
        self.students.retain(|s| &s.id != id);
        if self.students.len() == before {
            return Err(RollcallError::StudentNotFound(id.clone()));
        }
        Ok(())
    }

    fn enroll(&mut self, student_id: &StudentId, class_id: &ClassId) -> Result<()> {
        if !self.classes.iter().any(|c| &c.id == class_id) {
            return Err(RollcallError::ClassNotFound(class_id.clone()));
        }
        self.find_mut(student_id)?.class_id = Some(class_id.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::StudentStatus;

    /// A student whose email is derived from the name (`ana.souza@school.test`).
    pub fn sample_student(
        id: &str,
        name: impl Into<String>,
        birth: &str,
        status: StudentStatus,
        class_id: Option<ClassId>,
    ) -> Student {
        let name = name.into();
        let email = format!(
            "{}@school.test",
            name.to_lowercase().replace(char::is_whitespace, ".")
        );
        Student::new(id, name, birth, email, status, class_id)
    }

    pub struct RosterFixture {
        pub source: InMemorySource,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
            }
        }

        pub fn with_class(mut self, id: &str, name: &str, capacity: Option<u32>) -> Self {
            self.source.classes.push(Class::new(id, name, capacity));
            self
        }

        pub fn with_student(mut self, id: &str, name: &str, birth: &str, class: Option<&str>) -> Self {
            self.source.students.push(sample_student(
                id,
                name,
                birth,
                StudentStatus::Active,
                class.map(ClassId::new),
            ));
            self
        }

        pub fn with_inactive_student(
            mut self,
            id: &str,
            name: &str,
            birth: &str,
            class: Option<&str>,
        ) -> Self {
            self.source.students.push(sample_student(
                id,
                name,
                birth,
                StudentStatus::Inactive,
                class.map(ClassId::new),
            ));
            self
        }

        /// Two classes (`1a` capped at 2, `1b` open) and four students.
        pub fn school() -> Self {
            Self::new()
                .with_class("1a", "Year 1 A", Some(2))
                .with_class("1b", "Year 1 B", None)
                .with_student("1", "Bruno Lima", "2015-03-10", Some("1a"))
                .with_student("2", "ana souza", "2016-08-22", Some("1a"))
                .with_inactive_student("3", "Carla Dias", "2014-12-01", Some("1b"))
                .with_student("4", "Davi Rocha", "2015-06-15", None)
        }

        pub fn build(self) -> InMemorySource {
            self.source
        }
    }
}
