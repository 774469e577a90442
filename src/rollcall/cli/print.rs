use colored::{ColoredString, Colorize};
use rollcall::api::{CmdMessage, MessageLevel};
use rollcall::error::Result;
use rollcall::export::PLACEHOLDER;
use rollcall::model::{Class, StudentStatus};
use rollcall::pipeline::IndicatorSummary;
use rollcall::render::RosterRenderer;
use rollcall::state::StudentRow;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const NAME_WIDTH: usize = 28;
const AGE_WIDTH: usize = 4;
const STATUS_WIDTH: usize = 9;
const CLASS_WIDTH: usize = 18;

/// Writes rosters as aligned, optionally colored columns.
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        let color = colored::control::SHOULD_COLORIZE.should_colorize();
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> RosterRenderer for TerminalRenderer<W> {
    fn render_students(&mut self, rows: &[StudentRow]) -> Result<()> {
        if rows.is_empty() {
            writeln!(self.out, "No students found.")?;
            return Ok(());
        }

        let header = format!(
            "{}{}{}{}{}{}",
            pad_to_width("ID", ID_WIDTH),
            pad_to_width("NAME", NAME_WIDTH),
            pad_to_width("AGE", AGE_WIDTH),
            pad_to_width("STATUS", STATUS_WIDTH),
            pad_to_width("CLASS", CLASS_WIDTH),
            "EMAIL"
        );
        let header = self.paint(&header, |s| s.bold());
        writeln!(self.out, "{}", header)?;

        for row in rows {
            let s = &row.student;
            let age = row
                .age
                .map(|a| a.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            let class = row.class_name.as_deref().unwrap_or(PLACEHOLDER);

            let id = self.paint(&pad_to_width(s.id.as_str(), ID_WIDTH), |t| t.yellow());
            let status_cell = pad_to_width(s.status.as_str(), STATUS_WIDTH);
            let status = match s.status {
                StudentStatus::Active => self.paint(&status_cell, |t| t.green()),
                StudentStatus::Inactive => self.paint(&status_cell, |t| t.dimmed()),
            };
            let email = self.paint(&s.email, |t| t.dimmed());

            writeln!(
                self.out,
                "{}{}{}{}{}{}",
                id,
                pad_to_width(&s.name, NAME_WIDTH),
                pad_to_width(&age, AGE_WIDTH),
                status,
                pad_to_width(class, CLASS_WIDTH),
                email
            )?;
        }
        Ok(())
    }

    fn render_summary(&mut self, summary: &IndicatorSummary, classes: &[Class]) -> Result<()> {
        let total = self.paint(&summary.total.to_string(), |s| s.bold());
        let active = self.paint(&summary.active.to_string(), |s| s.green());
        writeln!(self.out, "Total: {}  Active: {}", total, active)?;

        for class in classes {
            let count = summary.class_count(&class.id);
            let seats = match class.seat_limit() {
                Some(capacity) => format!("{}/{}", count, capacity),
                None => count.to_string(),
            };
            let seats = match class.seat_limit() {
                Some(capacity) if count >= capacity as usize => self.paint(&seats, |s| s.red()),
                _ => seats,
            };
            writeln!(
                self.out,
                "  {}{}",
                pad_to_width(&class.name, CLASS_WIDTH + 2),
                seats
            )?;
        }
        Ok(())
    }

    fn render_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            let line = match message.level {
                MessageLevel::Info => self.paint(&message.content, |s| s.dimmed()),
                MessageLevel::Success => self.paint(&message.content, |s| s.green()),
                MessageLevel::Warning => self.paint(&message.content, |s| s.yellow()),
                MessageLevel::Error => self.paint(&message.content, |s| s.red()),
            };
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

/// Truncates to fit `width` columns (keeping one column of gap) and pads the rest.
fn pad_to_width(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
