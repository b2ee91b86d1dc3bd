use serde::{Deserialize, Serialize};

/// Error body both endpoints return on non-2xx responses. The `message`
/// field is optional on the wire; absence is handled by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
