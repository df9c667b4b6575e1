//! Component descriptors and row building
//!
//! One descriptor per component under test supplies the column layout,
//! the extractor field keys behind each column, and the validation
//! predicate. A single engine builds every header, data and error row
//! from the descriptor; no component carries its own copy of the loop.

use pagesweep_common::{PageFields, ResultTable, Verdict, ERROR_CELL, PROCESSING_ERROR_REASON};

/// Leading columns shared by every component
const LEAD_COLUMNS: [&str; 3] = ["URL", "Country", "Locale"];

/// Trailing verdict column shared by every component
const VERDICT_COLUMN: &str = "Validation Status";

/// A component under test: column layout plus validation predicate.
///
/// `columns` and `fields` are parallel: `fields[i]` is the extractor key
/// whose value lands under the `columns[i]` header.
pub trait Component: Send + Sync {
    /// Short name, used in artifact file names
    fn name(&self) -> &'static str;

    /// Column headers for the extracted fields, in output order
    fn columns(&self) -> &'static [&'static str];

    /// Extractor field keys, parallel to `columns`
    fn fields(&self) -> &'static [&'static str];

    /// Pure validation over the extracted fields
    fn validate(&self, fields: &PageFields) -> Verdict;
}

/// Total cell count of every row for this component
pub fn row_width(component: &dyn Component) -> usize {
    LEAD_COLUMNS.len() + component.columns().len() + 1
}

/// The header row: URL, Country, Locale, component columns, verdict.
pub fn header_row(component: &dyn Component) -> Vec<String> {
    let mut row: Vec<String> = LEAD_COLUMNS.iter().map(|c| c.to_string()).collect();
    row.extend(component.columns().iter().map(|c| c.to_string()));
    row.push(VERDICT_COLUMN.to_string());
    row
}

/// An empty result table with this component's header already in place
pub fn table_for(component: &dyn Component) -> ResultTable {
    ResultTable::new(header_row(component))
}

/// Build the data row for one successfully processed URL.
pub fn data_row(
    component: &dyn Component,
    url: &str,
    country: &str,
    locale: &str,
    fields: &PageFields,
) -> Vec<String> {
    let verdict = component.validate(fields);
    let mut row = vec![url.to_string(), country.to_string(), locale.to_string()];
    row.extend(component.fields().iter().map(|key| fields.value(key).to_string()));
    row.push(verdict.to_string());
    row
}

/// Build the degraded row recorded when processing a URL failed.
///
/// Every cell except the URL and the verdict is the literal error cell,
/// so the row keeps the exact width of the header.
pub fn error_row(component: &dyn Component, url: &str) -> Vec<String> {
    let mut row = vec![url.to_string()];
    row.extend(std::iter::repeat(ERROR_CELL.to_string()).take(row_width(component) - 2));
    row.push(Verdict::fail_with(PROCESSING_ERROR_REASON).to_string());
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Component for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn columns(&self) -> &'static [&'static str] {
            &["Widget Visibility", "Widget Title"]
        }

        fn fields(&self) -> &'static [&'static str] {
            &["widgetVis", "widgetTitle"]
        }

        fn validate(&self, fields: &PageFields) -> Verdict {
            if fields.value("widgetVis") == "Visible" {
                Verdict::Pass
            } else {
                Verdict::Fail
            }
        }
    }

    #[test]
    fn test_header_layout() {
        assert_eq!(
            header_row(&Probe),
            vec![
                "URL",
                "Country",
                "Locale",
                "Widget Visibility",
                "Widget Title",
                "Validation Status"
            ]
        );
    }

    #[test]
    fn test_data_row_follows_field_order() {
        let mut fields = PageFields::new();
        fields.insert("widgetTitle", "Acrobat");
        fields.insert("widgetVis", "Visible");

        let row = data_row(&Probe, "https://www.example.com/us/x", "us", "us", &fields);
        assert_eq!(
            row,
            vec![
                "https://www.example.com/us/x",
                "us",
                "us",
                "Visible",
                "Acrobat",
                "Pass"
            ]
        );
    }

    #[test]
    fn test_rows_always_match_header_width() {
        let fields = PageFields::new();
        let width = row_width(&Probe);
        assert_eq!(header_row(&Probe).len(), width);
        assert_eq!(data_row(&Probe, "u", "", "", &fields).len(), width);
        assert_eq!(error_row(&Probe, "u").len(), width);
    }

    #[test]
    fn test_error_row_shape() {
        let row = error_row(&Probe, "https://www.example.com/us/x");
        assert_eq!(
            row,
            vec![
                "https://www.example.com/us/x",
                "Error",
                "Error",
                "Error",
                "Error",
                "Fail - Processing error"
            ]
        );
    }
}
