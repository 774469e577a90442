//! # Roster Pipeline
//!
//! The three pure stages that turn a fetched roster into what gets shown:
//!
//! ```text
//! full roster ──► filter::apply ──► sort::apply ──► rows for the renderer
//!      │
//!      └────────► indicators::summarize ─────────► headline counts
//! ```
//!
//! None of the stages mutate their input or fail. Filtering and sorting run on
//! every render pass; the indicator summary only depends on the full roster and
//! is recomputed when the roster is replaced (see [`crate::state::AppState`]).

use crate::model::{ClassId, StudentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod filter;
pub mod indicators;
pub mod sort;

pub use indicators::IndicatorSummary;

/// Which students to show. `None` (or blank search text) means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub class_id: Option<ClassId>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.class_id.is_none() && self.status.is_none() && self.search_text().is_none()
    }

    /// The search text if there is any to match against.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The active ordering. Serialized as `{"field": "...", "order": "..."}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Switches to `field` and flips the current order, whichever field it
    /// belonged to. This is what clicking a column header does.
    pub fn toggled(self, field: SortField) -> Self {
        Self {
            field,
            order: self.order.flipped(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Name => "name",
            SortField::Age => "age",
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sort_is_name_ascending() {
        assert_eq!(
            SortSpec::default(),
            SortSpec::new(SortField::Name, SortOrder::Asc)
        );
    }

    #[test]
    fn toggling_flips_order_across_fields() {
        let spec = SortSpec::default().toggled(SortField::Age);
        assert_eq!(spec, SortSpec::new(SortField::Age, SortOrder::Desc));

        let spec = spec.toggled(SortField::Name);
        assert_eq!(spec, SortSpec::new(SortField::Name, SortOrder::Asc));
    }

    #[test]
    fn sort_spec_wire_format() {
        let spec = SortSpec::new(SortField::Age, SortOrder::Desc);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"field":"age","order":"desc"}"#);
    }

    #[test]
    fn blank_search_is_no_constraint() {
        let criteria = FilterCriteria {
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(criteria.search_text(), None);
    }
}
