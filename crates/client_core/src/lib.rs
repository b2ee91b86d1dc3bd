//! Client-side request orchestration for a knowledge-base service.
//!
//! Validators reject bad input before a controller is ever touched, a
//! [`SubmissionController`] owns the lifecycle state of one request flow and
//! publishes it through a watch channel, and decoders turn raw response
//! bodies into domain results. [`KnowledgeBaseClient`] wires one controller
//! per flow behind a single facade.

use tokio::sync::watch;
use tracing::info;
use url::Url;

use shared::domain::{Answer, Document};
use shared::protocol::AskRequest;

pub mod config;
pub mod controller;
pub mod decode;
pub mod error;
pub mod validate;

#[cfg(test)]
mod tests;

pub use config::{load_settings, Settings};
pub use controller::{RequestState, SubmissionController};
pub use decode::{AnswerDecoder, DecodeError, IngestAck, IngestAckDecoder, ResponseDecoder};
pub use error::{ClientError, RequestError, ValidationError};

/// Facade over the two submission flows: document ingestion and question
/// answering. Each flow has its own controller, so an in-flight ingestion
/// never blocks observing the ask state and vice versa.
pub struct KnowledgeBaseClient {
    ingest_url: Url,
    ask_url: Url,
    ingest: SubmissionController<IngestAck>,
    ask: SubmissionController<Answer>,
}

impl KnowledgeBaseClient {
    /// Fails when either configured endpoint is not a valid URL, so a broken
    /// address surfaces at startup rather than mid-submission.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            ingest_url: settings.ingest_url()?,
            ask_url: settings.ask_url()?,
            ingest: SubmissionController::new(),
            ask: SubmissionController::new(),
        })
    }

    /// Validates and uploads a document batch. Validation failures return
    /// before the controller or the network is touched.
    pub async fn ingest_documents(&mut self, batch: &[Document]) -> Result<IngestAck, ClientError> {
        validate::validate_batch(batch)?;
        info!(documents = batch.len(), "submitting document batch");
        let ack = self
            .ingest
            .submit(&self.ingest_url, batch, &IngestAckDecoder)
            .await?;
        Ok(ack)
    }

    /// Validates and submits a question; the trimmed text goes on the wire.
    pub async fn ask(&mut self, question: &str) -> Result<Answer, ClientError> {
        validate::validate_question(question)?;
        let request = AskRequest::new(question.trim());
        info!("submitting question");
        let answer = self
            .ask
            .submit(&self.ask_url, &request, &AnswerDecoder)
            .await?;
        Ok(answer)
    }

    pub fn ingest_state(&self) -> RequestState<IngestAck> {
        self.ingest.state()
    }

    pub fn ask_state(&self) -> RequestState<Answer> {
        self.ask.state()
    }

    pub fn subscribe_ingest(&self) -> watch::Receiver<RequestState<IngestAck>> {
        self.ingest.subscribe()
    }

    pub fn subscribe_ask(&self) -> watch::Receiver<RequestState<Answer>> {
        self.ask.subscribe()
    }
}
