//! Generic submission lifecycle: one controller instance owns the request
//! state for one flow and publishes it for the presentation layer to observe.

use reqwest::Client;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};
use url::Url;

use shared::error::ErrorBody;

use crate::decode::ResponseDecoder;
use crate::error::RequestError;

/// Shown when a rejection response carries no usable message of its own.
const REJECTION_FALLBACK: &str = "request failed";

/// Lifecycle of one user-initiated submission. `Succeeded` and `Failed` are
/// terminal until the next submit, which re-enters `Submitting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<R> {
    Idle,
    Submitting,
    Succeeded(R),
    Failed(RequestError),
}

impl<R> RequestState<R> {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Succeeded(_) | RequestState::Failed(_))
    }
}

/// Drives one request flow against one endpoint at a time.
///
/// The controller performs no domain validation; callers validate before
/// submitting. `submit` takes `&mut self`, so a second in-flight request on
/// the same instance is unrepresentable. State is published through a watch
/// channel so a frontend can either poll [`SubmissionController::state`] or
/// await changes on a [`SubmissionController::subscribe`]d receiver.
pub struct SubmissionController<R> {
    http: Client,
    state: watch::Sender<RequestState<R>>,
}

impl<R> SubmissionController<R> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            http: Client::new(),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<R>> {
        self.state.subscribe()
    }
}

impl<R> Default for SubmissionController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> SubmissionController<R> {
    /// Polling read of the current lifecycle state.
    pub fn state(&self) -> RequestState<R> {
        self.state.borrow().clone()
    }

    /// Issues exactly one POST with a JSON body and settles in a terminal
    /// state. The exit paths are mutually exclusive: a decoded success, a
    /// server rejection, a malformed success body, or a transport failure.
    /// There is no cancellation and no controller-level timeout.
    pub async fn submit<P, D>(
        &mut self,
        endpoint: &Url,
        payload: &P,
        decoder: &D,
    ) -> Result<R, RequestError>
    where
        P: Serialize + ?Sized,
        D: ResponseDecoder<Output = R>,
    {
        self.state.send_replace(RequestState::Submitting);
        debug!(endpoint = %endpoint, "submit: issuing request");

        let outcome = self.perform(endpoint, payload, decoder).await;

        let state = match &outcome {
            Ok(result) => RequestState::Succeeded(result.clone()),
            Err(err) => RequestState::Failed(err.clone()),
        };
        self.state.send_replace(state);

        outcome
    }

    async fn perform<P, D>(
        &self,
        endpoint: &Url,
        payload: &P,
        decoder: &D,
    ) -> Result<R, RequestError>
    where
        P: Serialize + ?Sized,
        D: ResponseDecoder<Output = R>,
    {
        let response = self
            .http
            .post(endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %endpoint, error = %err, "submit: transport failure");
                RequestError::NetworkFailure
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await.map_err(|err| {
                warn!(endpoint = %endpoint, error = %err, "submit: response body lost in transit");
                RequestError::NetworkFailure
            })?;
            decoder.decode(&body).map_err(|err| {
                warn!(endpoint = %endpoint, error = %err, "submit: success body did not decode");
                RequestError::MalformedResponse
            })
        } else {
            let message = match response.bytes().await {
                Ok(body) => rejection_message(&body),
                Err(_) => REJECTION_FALLBACK.to_owned(),
            };
            warn!(endpoint = %endpoint, status = %status, message = %message, "submit: server rejected request");
            Err(RequestError::ServerRejected(message))
        }
    }
}

fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| REJECTION_FALLBACK.to_owned())
}
