//! CSV and JSON export of the visible roster, and the matching parsers.
//!
//! JSON is the backend's own wire format. CSV carries everything needed to
//! rebuild the records plus two derived columns for people reading it in a
//! spreadsheet (`age` and `class`); the parser ignores those.

use crate::error::{RollcallError, Result};
use crate::model::{ClassId, Student, StudentId, StudentStatus};
use crate::state::StudentRow;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::io::Write;

pub const CSV_HEADER: [&str; 8] = [
    "id",
    "name",
    "birth_date",
    "age",
    "email",
    "status",
    "class_id",
    "class",
];

/// Shown for ages and class names that cannot be resolved.
pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn default_filename(&self, gzip: bool) -> String {
        if gzip {
            format!("students.{}.gz", self.extension())
        } else {
            format!("students.{}", self.extension())
        }
    }
}

pub fn render(format: ExportFormat, rows: &[StudentRow]) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(rows)),
        ExportFormat::Json => to_json(rows),
    }
}

pub fn to_json(rows: &[StudentRow]) -> Result<String> {
    let students: Vec<&Student> = rows.iter().map(|r| &r.student).collect();
    Ok(serde_json::to_string_pretty(&students)?)
}

pub fn from_json(content: &str) -> Result<Vec<Student>> {
    Ok(serde_json::from_str(content)?)
}

fn csv_quote(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn to_csv(rows: &[StudentRow]) -> String {
    let mut out = CSV_HEADER.join(",");
    out.push('\n');

    for row in rows {
        let s = &row.student;
        let age = row
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let class_id = s.class_id.as_ref().map(ClassId::as_str).unwrap_or("");
        let class_name = row.class_name.as_deref().unwrap_or(PLACEHOLDER);

        let fields = [
            csv_quote(s.id.as_str()),
            csv_quote(&s.name),
            csv_quote(&s.birth_date),
            age,
            csv_quote(&s.email),
            s.status.to_string(),
            csv_quote(class_id),
            csv_quote(class_name),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Splits CSV text into records. Quoted fields may contain commas, doubled
/// quotes and line breaks; blank lines are skipped.
fn parse_csv_records(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => record.push(std::mem::take(&mut field)),
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

pub fn from_csv(content: &str) -> Result<Vec<Student>> {
    let mut records = parse_csv_records(content).into_iter();
    let header = records
        .next()
        .ok_or_else(|| RollcallError::Export("CSV is empty".to_string()))?;
    let columns: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let column = |name: &str| {
        columns
            .get(name)
            .copied()
            .ok_or_else(|| RollcallError::Export(format!("CSV is missing column '{}'", name)))
    };
    let id_col = column("id")?;
    let name_col = column("name")?;
    let birth_col = column("birth_date")?;
    let email_col = column("email")?;
    let status_col = column("status")?;
    let class_col = column("class_id")?;

    records
        .enumerate()
        .map(|(i, record)| -> Result<Student> {
            let line = i + 2;
            let get = |col: usize| {
                record.get(col).map(String::as_str).ok_or_else(|| {
                    RollcallError::Export(format!("CSV record {} has too few fields", line))
                })
            };
            let status: StudentStatus = get(status_col)?
                .parse()
                .map_err(|e| RollcallError::Export(format!("CSV record {}: {}", line, e)))?;
            let class_id = get(class_col)?;

            Ok(Student {
                id: StudentId::new(get(id_col)?),
                name: get(name_col)?.to_string(),
                birth_date: get(birth_col)?.to_string(),
                email: get(email_col)?.to_string(),
                status,
                class_id: (!class_id.is_empty()).then(|| ClassId::new(class_id)),
            })
        })
        .collect()
}

pub fn gzip(content: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content).map_err(RollcallError::Io)?;
    encoder.finish().map_err(RollcallError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Class;
    use crate::source::memory::fixtures::sample_student;
    use crate::pipeline::{FilterCriteria, SortField, SortOrder, SortSpec};
    use crate::state::AppState;
    use chrono::NaiveDate;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn state() -> AppState {
        let mut state = AppState::new(SortSpec::new(SortField::Age, SortOrder::Desc));
        let mut tricky = sample_student(
            "10",
            "O'Neil, \"Jay\"",
            "2012-02-29",
            StudentStatus::Active,
            Some(ClassId::new("1")),
        );
        tricky.email = "jay@example.com".into();
        state.replace_roster(
            vec![
                sample_student("7", "Ana", "2014-05-01", StudentStatus::Inactive, None),
                tricky,
                sample_student("8", "Bia\nLine", "bad-date", StudentStatus::Active, Some(ClassId::new("2"))),
                sample_student("9", "Caio", "2010-09-09", StudentStatus::Active, Some(ClassId::new("1"))),
            ],
            vec![Class::new("1", "Year 1, A", None)],
        );
        state
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let rows = state().visible_rows(today());
        let json = to_json(&rows).unwrap();
        let parsed = from_json(&json).unwrap();
        let expected: Vec<Student> = rows.into_iter().map(|r| r.student).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn csv_round_trip_preserves_order() {
        let mut state = state();
        state.filters = FilterCriteria::default();
        let rows = state.visible_rows(today());
        let csv = to_csv(&rows);
        let parsed = from_csv(&csv).unwrap();
        let expected: Vec<Student> = rows.into_iter().map(|r| r.student).collect();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn csv_shows_placeholders_and_quotes() {
        let rows = state().visible_rows(today());
        let csv = to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,birth_date,age,email,status,class_id,class"
        );
        // Oldest first, unknown age last.
        assert!(csv.contains(r#"9,Caio,2010-09-09,13,caio@school.test,active,1,"Year 1, A""#));
        assert!(csv.contains(r#""O'Neil, ""Jay""""#));
        assert!(csv.contains("7,Ana,2014-05-01,10,ana@school.test,inactive,,-"));
        assert!(csv.contains(",bad-date,-,"));
    }

    #[test]
    fn csv_parser_handles_crlf_and_blank_lines() {
        let content = "id,name,birth_date,email,status,class_id\r\n1,Ana,2014-05-01,a@b.co,ativo,3\r\n\r\n";
        let parsed = from_csv(content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].status, StudentStatus::Active);
        assert_eq!(parsed[0].class_id, Some(ClassId::new("3")));
    }

    #[test]
    fn csv_parser_reports_missing_columns() {
        let err = from_csv("id,name\n1,Ana\n").unwrap_err();
        assert!(err.to_string().contains("birth_date"));
    }

    #[test]
    fn gzip_output_decompresses() {
        let rows = state().visible_rows(today());
        let csv = to_csv(&rows);
        let packed = gzip(csv.as_bytes()).unwrap();
        assert_eq!(&packed[..2], &[0x1f, 0x8b]);

        let mut unpacked = String::new();
        GzDecoder::new(packed.as_slice())
            .read_to_string(&mut unpacked)
            .unwrap();
        assert_eq!(unpacked, csv);
    }

    #[test]
    fn default_filenames() {
        assert_eq!(ExportFormat::Csv.default_filename(false), "students.csv");
        assert_eq!(ExportFormat::Json.default_filename(true), "students.json.gz");
    }
}
