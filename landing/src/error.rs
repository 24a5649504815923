//! Error type shared by the browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from talking to the browser. None of these are fatal for the
/// page; call sites log them and carry on.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("local storage is not available")]
    StorageUnavailable,

    #[error("local storage {op} failed for key `{key}`: {detail}")]
    Storage {
        op: &'static str,
        key: String,
        detail: String,
    },

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("could not create object URL: {0}")]
    ObjectUrl(String),

    #[error("could not dispatch `{event}` event: {detail}")]
    Dispatch { event: String, detail: String },
}

/// Best-effort text for a thrown JS value.
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub type Result<T, E = LandingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_names_key_and_operation() {
        let err = LandingError::Storage {
            op: "write",
            key: "krish-e-tour-seen".into(),
            detail: "QuotaExceededError".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("write"));
        assert!(msg.contains("krish-e-tour-seen"));
        assert!(msg.contains("QuotaExceededError"));
    }

    #[test]
    fn clipboard_error_keeps_detail() {
        let err = LandingError::Clipboard("NotAllowedError".into());
        assert_eq!(err.to_string(), "clipboard write failed: NotAllowedError");
    }
}
