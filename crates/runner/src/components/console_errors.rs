//! Page-load status and browser console error probe

use pagesweep_common::{PageFields, Verdict};

use crate::component::Component;

/// Extractor value reported when the console stayed clean
const NO_ERRORS: &str = "No errors found";

pub struct ConsoleErrors;

impl Component for ConsoleErrors {
    fn name(&self) -> &'static str {
        "consoleErrors"
    }

    fn columns(&self) -> &'static [&'static str] {
        &["Page Status", "Console Errors", "Timestamp"]
    }

    fn fields(&self) -> &'static [&'static str] {
        &["pageStatus", "consoleErrors", "timestamp"]
    }

    fn validate(&self, fields: &PageFields) -> Verdict {
        let status: u16 = fields.value("pageStatus").parse().unwrap_or(0);
        if status == 0 {
            return Verdict::fail_with("Page failed to load");
        }
        if status >= 400 {
            return Verdict::fail_with(format!("Page returned status {}", status));
        }

        let errors = fields.value("consoleErrors");
        if !errors.is_empty() && errors != NO_ERRORS {
            return Verdict::fail_with("Console errors detected");
        }

        Verdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(status: &str, errors: &str) -> PageFields {
        let mut f = PageFields::new();
        f.insert("pageStatus", status);
        f.insert("consoleErrors", errors);
        f.insert("timestamp", "2024-05-01T10:00:00Z");
        f
    }

    #[test]
    fn test_clean_page_passes() {
        assert_eq!(
            ConsoleErrors.validate(&fields("200", "No errors found")),
            Verdict::Pass
        );
    }

    #[test]
    fn test_unloadable_page() {
        assert_eq!(
            ConsoleErrors.validate(&fields("0", "")).to_string(),
            "Fail - Page failed to load"
        );
    }

    #[test]
    fn test_http_error_status_carries_code() {
        assert_eq!(
            ConsoleErrors.validate(&fields("404", "No errors found")).to_string(),
            "Fail - Page returned status 404"
        );
    }

    #[test]
    fn test_console_errors_detected() {
        assert_eq!(
            ConsoleErrors
                .validate(&fields("200", "TypeError: x is undefined"))
                .to_string(),
            "Fail - Console errors detected"
        );
    }

    #[test]
    fn test_unparseable_status_counts_as_unloaded() {
        assert_eq!(
            ConsoleErrors.validate(&fields("abc", "")).to_string(),
            "Fail - Page failed to load"
        );
    }
}
