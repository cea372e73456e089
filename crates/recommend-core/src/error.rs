use serde_json::Value;

/// Error body returned by the recommendations service on non-2xx responses.
///
/// The service is not consistent about its shape: validation failures carry
/// `{"status", "error", "message"}` while lookups that miss carry only
/// `{"error"}`. Each field is read on its own, so a mistyped one does not hide
/// the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body. Anything that is not a JSON object yields an
    /// empty body rather than an error.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(bytes).unwrap_or_default();
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            message: text("message"),
            error: text("error"),
        }
    }

    /// The human-readable reason: `message`, then `error`, skipping blanks.
    pub fn reason(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }

    /// The reason, or `HTTP {status}` when the body carried none.
    pub fn reason_or_status(&self, status: u16) -> String {
        self.reason()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("HTTP {status}"))
    }
}
