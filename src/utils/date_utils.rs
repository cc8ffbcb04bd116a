//! Date parsing and comparison for record dates.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Format record dates are written in
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Outcome of comparing two optional record dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrdering {
    Before,
    After,
    Equal,
    /// At least one side is missing or does not parse
    Indeterminate,
}

impl From<Ordering> for DateOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Before,
            Ordering::Greater => Self::After,
            Ordering::Equal => Self::Equal,
        }
    }
}

/// Compares record dates written in a fixed textual format
#[derive(Debug, Clone)]
pub struct DateComparator {
    format: String,
}

impl Default for DateComparator {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl DateComparator {
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Parse a date, returning `None` when it does not match the format
    #[must_use]
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(s.trim(), &self.format) {
            Ok(date) => Some(date),
            Err(e) => {
                log::debug!("Ignoring unparsable date {s:?}: {e}");
                None
            }
        }
    }

    /// Order `left` relative to `right`
    ///
    /// Missing or unparsable input yields [`DateOrdering::Indeterminate`],
    /// which every rule treats as "no finding".
    #[must_use]
    pub fn compare(&self, left: Option<&str>, right: Option<&str>) -> DateOrdering {
        let (Some(left), Some(right)) = (left, right) else {
            return DateOrdering::Indeterminate;
        };
        match (self.parse(left), self.parse(right)) {
            (Some(l), Some(r)) => l.cmp(&r).into(),
            _ => DateOrdering::Indeterminate,
        }
    }

    /// Strictly after; false when indeterminate
    #[must_use]
    pub fn is_after(&self, left: Option<&str>, right: Option<&str>) -> bool {
        self.compare(left, right) == DateOrdering::After
    }

    /// Strictly before; false when indeterminate
    #[must_use]
    pub fn is_before(&self, left: Option<&str>, right: Option<&str>) -> bool {
        self.compare(left, right) == DateOrdering::Before
    }
}
