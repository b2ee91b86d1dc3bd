use serde::{Deserialize, Serialize};

/// Number of sources requested alongside every answer.
pub const DEFAULT_TOP_K: u32 = 3;

/// Body of a question-answering request. The ingestion request has no wrapper
/// of its own: its body is the bare JSON array of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(rename = "topK")]
    pub top_k: u32,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            top_k: DEFAULT_TOP_K,
        }
    }
}
