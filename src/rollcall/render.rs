//! Renderer capability.
//!
//! The library hands finished data to a renderer and never formats output
//! itself. The CLI implements this for a terminal; tests can implement it over
//! a buffer.

use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Class;
use crate::pipeline::IndicatorSummary;
use crate::state::StudentRow;

pub trait RosterRenderer {
    /// Rows arrive filtered and sorted. An empty slice is a valid roster.
    fn render_students(&mut self, rows: &[StudentRow]) -> Result<()>;

    /// `classes` gives names and order for the per-class counts.
    fn render_summary(&mut self, summary: &IndicatorSummary, classes: &[Class]) -> Result<()>;

    fn render_messages(&mut self, messages: &[CmdMessage]) -> Result<()>;
}
