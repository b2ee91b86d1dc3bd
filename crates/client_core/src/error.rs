use thiserror::Error;

/// Pre-flight input problems. Resolved entirely at the boundary; never sent
/// over the wire and never seen by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A document in the batch has an empty id, title, or content.
    #[error("Please fill in all fields for each document.")]
    IncompleteFields,
    /// The batch itself has no documents.
    #[error("Please add at least one document.")]
    EmptyBatch,
    /// The question is empty after trimming.
    #[error("Please enter a question.")]
    EmptyQuestion,
}

/// Terminal failure of one submission. Never retried automatically; the
/// display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The service answered with a non-success status. Carries the service's
    /// own message verbatim when the error body had one.
    #[error("{0}")]
    ServerRejected(String),
    /// The service answered 2xx but the body did not decode.
    #[error("unexpected response format")]
    MalformedResponse,
    /// No response was received at all.
    #[error("network error, please retry")]
    NetworkFailure,
}

/// Everything a submission attempt through [`crate::KnowledgeBaseClient`]
/// can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
