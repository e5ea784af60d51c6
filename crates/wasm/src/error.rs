//! Error handling for WASM bindings.
//!
//! Converts pagenav's error types into JavaScript-friendly errors.

use pagenav_core::NavigatorError;
use pagenav_traits::HostError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid or unparsable navigator configuration
    Config,
    /// No window or document (e.g. running in a worker)
    Environment,
    /// A selector the document rejected
    Selector,
    /// An event listener could not be registered
    Listener,
}

impl ErrorCode {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
            ErrorCode::Selector => "SELECTOR_ERROR",
            ErrorCode::Listener => "LISTENER_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it is converted into a JS `Error` carrying a
/// `code` property instead.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct PageNavError {
    code: ErrorCode,
    message: String,
}

impl PageNavError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<HostError> for PageNavError {
    fn from(err: HostError) -> Self {
        let code = match &err {
            HostError::NoWindow | HostError::NoDocument => ErrorCode::Environment,
            HostError::Query { .. } => ErrorCode::Selector,
            HostError::Listener { .. } => ErrorCode::Listener,
        };
        Self::new(code, err.to_string())
    }
}

impl From<NavigatorError> for PageNavError {
    fn from(err: NavigatorError) -> Self {
        match err {
            NavigatorError::InvalidConfig(msg) => Self::config(msg),
            NavigatorError::Host(host) => host.into(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for PageNavError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid config object: {err}"))
    }
}

impl From<PageNavError> for JsValue {
    fn from(err: PageNavError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}
