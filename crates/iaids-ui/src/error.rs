//! Error types for widget configuration and DOM attachment.

use thiserror::Error;

/// Result alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Errors raised while configuring or attaching a widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Configuration payload was not valid JSON for [`crate::config::WidgetConfig`].
    #[error("invalid widget configuration")]
    ConfigParse {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// A configuration field failed validation.
    #[error("invalid widget configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// A browser global such as `window` or `document` was unavailable.
    #[error("browser global unavailable")]
    MissingGlobal {
        /// Name of the missing global.
        name: &'static str,
    },
    /// The browser rejected a DOM operation.
    #[error("dom operation failed")]
    Dom {
        /// DOM operation that failed.
        operation: &'static str,
        /// Browser-provided detail, when available.
        detail: String,
    },
}

#[cfg(target_arch = "wasm32")]
impl WidgetError {
    /// Wrap a rejected DOM call, keeping the JS error text for the console.
    pub(crate) fn dom(operation: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom {
            operation,
            detail: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn json_error() -> serde_json::Error {
        match serde_json::from_str::<serde_json::Value>("{") {
            Ok(_) => serde::de::Error::custom("expected invalid json"),
            Err(err) => err,
        }
    }

    #[test]
    fn widget_error_messages_are_stable() {
        let cases = vec![
            (
                WidgetError::ConfigParse {
                    source: json_error(),
                },
                "invalid widget configuration",
                true,
            ),
            (
                WidgetError::InvalidField {
                    field: "tag_class",
                    value: String::new(),
                    reason: "empty",
                },
                "invalid widget configuration field",
                false,
            ),
            (
                WidgetError::MissingGlobal { name: "document" },
                "browser global unavailable",
                false,
            ),
            (
                WidgetError::Dom {
                    operation: "create_element",
                    detail: "InvalidCharacterError".to_string(),
                },
                "dom operation failed",
                false,
            ),
        ];

        for (err, message, has_source) in cases {
            assert_eq!(err.to_string(), message);
            assert_eq!(err.source().is_some(), has_source);
        }
    }
}
