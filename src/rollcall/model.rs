//! Roster data types.
//!
//! Field names follow the Rust side; the `serde` attributes map them onto the
//! backend's JSON (`nome`, `data_nascimento`, `turma_id`, ...). Identifiers are
//! accepted as JSON numbers or strings and kept as strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct StudentId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ClassId(String);

impl From<RawId> for StudentId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl From<RawId> for ClassId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `null`, a missing field and `""` all mean "not assigned to a class".
fn deserialize_class_ref<'de, D>(deserializer: D) -> Result<Option<ClassId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(String::from)
        .filter(|s| !s.is_empty())
        .map(ClassId))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    #[serde(rename = "ativo", alias = "active")]
    Active,
    #[serde(rename = "inativo", alias = "inactive")]
    Inactive,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "active",
            StudentStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "ativo" => Ok(StudentStatus::Active),
            "inactive" | "inativo" => Ok(StudentStatus::Inactive),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Kept as delivered; parsing happens in [`crate::age`].
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,
    #[serde(default)]
    pub email: String,
    pub status: StudentStatus,
    #[serde(
        rename = "turma_id",
        default,
        deserialize_with = "deserialize_class_ref"
    )]
    pub class_id: Option<ClassId>,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        email: impl Into<String>,
        status: StudentStatus,
        class_id: Option<ClassId>,
    ) -> Self {
        Self {
            id: StudentId::new(id),
            name: name.into(),
            birth_date: birth_date.into(),
            email: email.into(),
            status,
            class_id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    #[serde(rename = "nome")]
    pub name: String,
    /// `None` or `0` means the class takes any number of students.
    #[serde(rename = "capacidade", default)]
    pub capacity: Option<u32>,
}

impl Class {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: Option<u32>) -> Self {
        Self {
            id: ClassId::new(id),
            name: name.into(),
            capacity,
        }
    }

    /// The enforced seat limit, if any.
    pub fn seat_limit(&self) -> Option<u32> {
        self.capacity.filter(|c| *c > 0)
    }
}

/// Body of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,
    pub email: String,
    pub status: StudentStatus,
    #[serde(rename = "turma_id")]
    pub class_id: Option<ClassId>,
}

impl StudentDraft {
    /// Trims the free-text fields the way a submitted form would be.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.birth_date = self.birth_date.trim().to_string();
        self
    }
}

/// A partial edit: `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub email: Option<String>,
    pub status: Option<StudentStatus>,
    pub class_id: Option<ClassId>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self == &StudentPatch::default()
    }

    pub fn apply(self, student: &Student) -> StudentDraft {
        StudentDraft {
            name: self.name.unwrap_or_else(|| student.name.clone()),
            birth_date: self
                .birth_date
                .unwrap_or_else(|| student.birth_date.clone()),
            email: self.email.unwrap_or_else(|| student.email.clone()),
            status: self.status.unwrap_or(student.status),
            class_id: self.class_id.or_else(|| student.class_id.clone()),
        }
        .normalized()
    }
}
