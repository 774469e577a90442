use crate::config::RollcallConfig;
use crate::model::Class;
use crate::pipeline::{IndicatorSummary, SortSpec};
use crate::state::StudentRow;

pub mod config;
pub mod create;
pub mod delete;
pub mod enroll;
pub mod export;
pub mod list;
pub mod sort;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Export payload, ready to be written wherever the client wants it.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub filename: String,
    pub content: Vec<u8>,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_students: Vec<StudentRow>,
    pub summary: Option<IndicatorSummary>,
    pub classes: Vec<Class>,
    pub sort: Option<SortSpec>,
    pub config: Option<RollcallConfig>,
    pub export: Option<ExportOutput>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_students(mut self, rows: Vec<StudentRow>) -> Self {
        self.listed_students = rows;
        self
    }

    pub fn with_summary(mut self, summary: IndicatorSummary, classes: Vec<Class>) -> Self {
        self.summary = Some(summary);
        self.classes = classes;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_config(mut self, config: RollcallConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_export(mut self, export: ExportOutput) -> Self {
        self.export = Some(export);
        self
    }
}
