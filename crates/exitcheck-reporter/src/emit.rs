use exitcheck_utils::canonicalization;
use exitcheck_utils::error::ExitCheckError;
use exitcheck_utils::types::ValidationResult;

use super::ResultWriter;

impl ResultWriter {
    /// Render a result document in the configured format, newline-terminated.
    pub(super) fn render(&self, result: &ValidationResult) -> Result<String, ExitCheckError> {
        let mut body = canonicalization::emit(result, self.format)
            .map_err(|e| ExitCheckError::Serialization(format!("{e:#}")))?;
        body.push('\n');
        Ok(body)
    }
}
