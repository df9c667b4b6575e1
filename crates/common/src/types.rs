//! Core types for pagesweep

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// A named group of input URLs, read from one sheet of the input source.
///
/// Group order and URL order are preserved from the source; a group is
/// immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowGroup {
    pub name: String,
    pub urls: Vec<String>,
}

impl RowGroup {
    pub fn new(name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            urls,
        }
    }
}

/// Opaque field map produced by the page-data extractor for one URL.
///
/// Consumers read fields by key; a missing key reads as the empty string,
/// which every validator treats as a failing value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageFields(HashMap<String, String>);

impl PageFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Field value by key, or "" when the extractor did not produce it.
    pub fn value(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PageFields {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validation outcome for one processed URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
    /// Failure with a reason, rendered as "Fail - <reason>"
    FailWith(String),
}

impl Verdict {
    pub fn fail_with(reason: impl Into<String>) -> Self {
        Verdict::FailWith(reason.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
            Verdict::FailWith(reason) => write!(f, "Fail - {}", reason),
        }
    }
}

/// A header row plus zero or more data rows, all of the same width.
///
/// One table exists per (worker, group) pair while the group is being
/// processed, then it is persisted and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a data row. Rejects rows whose width differs from the header.
    pub fn push(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(Error::RowWidth {
                expected: self.headers.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of cells in every row, header included
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header is not counted)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_rendering() {
        assert_eq!(Verdict::Pass.to_string(), "Pass");
        assert_eq!(Verdict::Fail.to_string(), "Fail");
        assert_eq!(
            Verdict::fail_with("Processing error").to_string(),
            "Fail - Processing error"
        );
    }

    #[test]
    fn test_table_rejects_ragged_rows() {
        let mut table = ResultTable::new(vec!["URL".into(), "Status".into()]);
        table
            .push(vec!["https://example.com".into(), "Pass".into()])
            .unwrap();

        let err = table.push(vec!["https://example.com".into()]).unwrap_err();
        assert!(matches!(
            err,
            Error::RowWidth {
                expected: 2,
                got: 1
            }
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_field_reads_empty() {
        let fields = PageFields::new();
        assert_eq!(fields.value("anything"), "");
    }
}
