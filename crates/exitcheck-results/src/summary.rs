use std::fmt::Write;

use crate::model::{ResultDocument, ResultEntry};

impl ResultEntry {
    fn detail_line(&self) -> String {
        let code = self
            .exit_code
            .map_or_else(|| "?".to_string(), |c| c.to_string());
        let message = self.message.as_deref().unwrap_or("Unknown error");
        format!("  - Exit Code {code}: {message}")
    }
}

impl ResultDocument {
    /// One-line summary for operator logs.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Exit check results - Status: {}, Total Failures: {}, Timestamp: {}",
            self.overall_status, self.total_failures, self.timestamp
        )
    }

    /// Multi-line failure report, only for FAILED documents that list at
    /// least one validation.
    #[must_use]
    pub fn failure_details(&self) -> Option<String> {
        if !self.failed() || self.failed_validations.is_empty() {
            return None;
        }

        let mut out = format!("Exit check failed with {} failure(s):", self.total_failures);
        for entry in &self.failed_validations {
            let _ = write!(out, "\n{}", entry.detail_line());
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exitcheck_utils::messages::ErrorMessageTable;
    use exitcheck_utils::types::ValidationResult;
    use proptest::prelude::*;

    fn failed_doc(codes: &[i32]) -> ResultDocument {
        let table = ErrorMessageTable::from_iter([(4, "bad input"), (7, "timeout")]);
        ResultDocument::from(&ValidationResult::failed("2025-11-18 22:54:32 UTC", codes, &table))
    }

    #[test]
    fn test_summary_line() {
        let doc = failed_doc(&[4, 7]);
        assert_eq!(
            doc.summary_line(),
            "Exit check results - Status: FAILED, Total Failures: 2, Timestamp: 2025-11-18 22:54:32 UTC"
        );
    }

    #[test]
    fn test_summary_line_for_defaults() {
        assert_eq!(
            ResultDocument::default().summary_line(),
            "Exit check results - Status: UNKNOWN, Total Failures: 0, Timestamp: N/A"
        );
    }

    #[test]
    fn test_failure_details_lists_each_validation() {
        let details = failed_doc(&[4, 4, 7]).failure_details().unwrap();
        assert_eq!(
            details,
            "Exit check failed with 3 failure(s):\n  - Exit Code 4: bad input\n  - Exit Code 4: bad input\n  - Exit Code 7: timeout"
        );
    }

    #[test]
    fn test_failure_details_absent_for_pass_and_empty_failure() {
        let passed = ResultDocument::from(&ValidationResult::passed("t"));
        assert!(passed.passed());
        assert!(passed.failure_details().is_none());
        assert!(failed_doc(&[]).failure_details().is_none());
    }

    #[test]
    fn test_partial_entry_renders_placeholders() {
        let entry = ResultEntry {
            exit_code: None,
            message: None,
        };
        assert_eq!(entry.detail_line(), "  - Exit Code ?: Unknown error");
    }

    proptest! {
        #[test]
        fn prop_details_has_one_line_per_validation(codes in prop::collection::vec(1i32..50, 1..10)) {
            let details = failed_doc(&codes).failure_details().unwrap();
            prop_assert_eq!(details.lines().count(), codes.len() + 1);
        }
    }
}
