use super::RosterSource;
use crate::error::{RollcallError, Result};
use crate::model::{Class, ClassId, Student, StudentDraft, StudentId};
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct EnrollmentRequest<'a> {
    aluno_id: &'a StudentId,
    turma_id: &'a ClassId,
}

/// Client for the roster REST backend.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(RollcallError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = Self::check(self.client.get(&url).send()?)?;
        Ok(response.json()?)
    }
}

impl RosterSource for HttpSource {
    fn fetch_students(&self) -> Result<Vec<Student>> {
        self.get_json("alunos")
    }

    fn fetch_classes(&self) -> Result<Vec<Class>> {
        self.get_json("turmas")
    }

    fn create_student(&mut self, draft: &StudentDraft) -> Result<()> {
        let url = self.url("alunos");
        debug!(%url, "POST");
        Self::check(self.client.post(&url).json(draft).send()?)?;
        Ok(())
    }

    fn update_student(&mut self, id: &StudentId, draft: &StudentDraft) -> Result<()> {
        let url = self.url(&format!("alunos/{}", id));
        debug!(%url, "PUT");
        Self::check(self.client.put(&url).json(draft).send()?)?;
        Ok(())
    }

    fn delete_student(&mut self, id: &StudentId) -> Result<()> {
        let url = self.url(&format!("alunos/{}", id));
        debug!(%url, "DELETE");
        Self::check(self.client.delete(&url).send()?)?;
        Ok(())
    }

    fn enroll(&mut self, student_id: &StudentId, class_id: &ClassId) -> Result<()> {
        let url = self.url("matriculas");
        debug!(%url, student = %student_id, class = %class_id, "POST");
        let body = EnrollmentRequest {
            aluno_id: student_id,
            turma_id: class_id,
        };
        Self::check(self.client.post(&url).json(&body).send()?)?;
        Ok(())
    }
}
