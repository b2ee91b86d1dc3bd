//! Pre-flight input validation. Pure predicates with no network access.

use shared::domain::Document;

use crate::error::ValidationError;

/// Checks a document batch for completeness before submission.
///
/// All-or-nothing: a single incomplete document rejects the whole batch.
/// An empty batch is rejected explicitly rather than assumed away.
pub fn validate_batch(batch: &[Document]) -> Result<(), ValidationError> {
    if batch.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    if batch.iter().any(|document| !document.is_complete()) {
        return Err(ValidationError::IncompleteFields);
    }
    Ok(())
}

/// Rejects questions that are empty after trimming. No maximum length is
/// enforced here; that policy belongs to the backend.
pub fn validate_question(question: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    Ok(())
}
