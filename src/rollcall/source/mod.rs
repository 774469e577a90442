//! # Data Source
//!
//! The roster is owned by the school's backend. [`RosterSource`] is the seam
//! between rollcall and whatever serves it:
//!
//! - [`http::HttpSource`]: the REST backend (`/alunos`, `/turmas`, `/matriculas`)
//! - [`memory::InMemorySource`]: a mutable in-process roster for tests
//!
//! Fetches always return the complete set; callers replace what they hold
//! instead of patching it.

use crate::error::Result;
use crate::model::{Class, ClassId, Student, StudentDraft, StudentId};

pub mod http;
pub mod memory;

pub trait RosterSource {
    fn fetch_students(&self) -> Result<Vec<Student>>;

    fn fetch_classes(&self) -> Result<Vec<Class>>;

    fn create_student(&mut self, draft: &StudentDraft) -> Result<()>;

    fn update_student(&mut self, id: &StudentId, draft: &StudentDraft) -> Result<()>;

    fn delete_student(&mut self, id: &StudentId) -> Result<()>;

    /// Assigns a student to a class.
    fn enroll(&mut self, student_id: &StudentId, class_id: &ClassId) -> Result<()>;
}
