use camino::Utf8Path;

use exitcheck_utils::atomic_write::write_file_atomic;
use exitcheck_utils::error::ExitCheckError;
use exitcheck_utils::messages::ErrorMessageTable;
use exitcheck_utils::timestamp::format_utc;
use exitcheck_utils::types::ValidationResult;

use super::ResultWriter;

impl ResultWriter {
    /// Replace the result file with `result` using an atomic rename.
    ///
    /// Readers observe either the previous document or the new one, never a
    /// partial write.
    pub fn write(&self, result: &ValidationResult) -> Result<(), ExitCheckError> {
        let body = self.render(result)?;

        let outcome = write_file_atomic(&self.path, &body).map_err(|e| {
            ExitCheckError::ResultWriteFailed {
                path: self.path.to_string(),
                reason: format!("{e:#}"),
            }
        })?;

        tracing::debug!(
            path = %self.path,
            status = %result.overall_status,
            total_failures = result.total_failures,
            replaced_existing = outcome.replaced_existing,
            rename_retries = outcome.rename_retry_count,
            "wrote validation result"
        );
        Ok(())
    }

    /// Write a PASSED document stamped with the current time.
    pub fn write_success(&self) -> Result<ValidationResult, ExitCheckError> {
        let result = ValidationResult::passed(format_utc((self.clock)()));
        self.write(&result)?;
        Ok(result)
    }

    /// Write a FAILED document for `codes`, in the order given.
    ///
    /// Duplicate codes are kept. An empty slice still produces a FAILED
    /// document with zero failures.
    pub fn write_failure(
        &self,
        codes: &[i32],
        table: &ErrorMessageTable,
    ) -> Result<ValidationResult, ExitCheckError> {
        let result = ValidationResult::failed(format_utc((self.clock)()), codes, table);
        self.write(&result)?;
        Ok(result)
    }
}

/// Write a PASSED result document to `path` in the default format.
pub fn write_success_result(path: &Utf8Path) -> Result<ValidationResult, ExitCheckError> {
    ResultWriter::new(path).write_success()
}

/// Write a FAILED result document for `codes` to `path` in the default format.
pub fn write_failure_result(
    path: &Utf8Path,
    codes: &[i32],
    table: &ErrorMessageTable,
) -> Result<ValidationResult, ExitCheckError> {
    ResultWriter::new(path).write_failure(codes, table)
}
