//! Decoders that turn raw 2xx response bodies into domain results.

use serde_json::Value;
use thiserror::Error;

use shared::domain::{Answer, Source};

/// Turns a raw success-response body into a domain result. Decoders are pure
/// and idempotent; the same body always yields the same result.
pub trait ResponseDecoder {
    type Output;

    fn decode(&self, body: &[u8]) -> Result<Self::Output, DecodeError>;
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("`{field}` is missing or has the wrong type")]
    BadField { field: &'static str },
}

/// Decoder for the question-answering endpoint.
///
/// `answer` must be a string. `sources` may be absent or null; when present
/// it must be an array. Entries without string `id` and `title` are dropped
/// rather than failing the decode, so partial source metadata never blocks
/// the answer text. Entry order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerDecoder;

impl ResponseDecoder for AnswerDecoder {
    type Output = Answer;

    fn decode(&self, body: &[u8]) -> Result<Answer, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;
        let answer = value
            .get("answer")
            .and_then(Value::as_str)
            .ok_or(DecodeError::BadField { field: "answer" })?
            .to_owned();
        let sources = match value.get("sources") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries.iter().filter_map(source_entry).collect(),
            Some(_) => return Err(DecodeError::BadField { field: "sources" }),
        };
        Ok(Answer { answer, sources })
    }
}

fn source_entry(entry: &Value) -> Option<Source> {
    let id = entry.get("id")?.as_str()?;
    let title = entry.get("title")?.as_str()?;
    Some(Source {
        id: id.to_owned(),
        title: title.to_owned(),
    })
}

/// Acknowledgment of a successful ingestion. The success body carries no
/// contract, so there is nothing to read out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestAck;

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestAckDecoder;

impl ResponseDecoder for IngestAckDecoder {
    type Output = IngestAck;

    fn decode(&self, _body: &[u8]) -> Result<IngestAck, DecodeError> {
        Ok(IngestAck)
    }
}
