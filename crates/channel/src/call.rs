//! Method calls and their outcomes

use serde::{Deserialize, Serialize};

/// A single named request received over a method channel.
///
/// A call is created when the request arrives and dropped once its outcome
/// has been delivered; it has no identity beyond the in-flight dispatch.
/// The engine channel protocol carries no arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    method: String,
}

impl MethodCall {
    /// Create a call for the given method name
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    /// The method name, exactly as sent by the caller
    pub fn method(&self) -> &str {
        &self.method
    }
}

/// The reply to a method call.
///
/// Every dispatched call produces exactly one outcome, never zero and never
/// two. `NotImplemented` is a defined, recoverable negative result, not a
/// fault: it tells the caller no handler exists for the method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// The request was recognized and answered with a payload
    Success(String),
    /// No handler exists for the requested method name
    NotImplemented,
}

impl Outcome {
    /// Create a success outcome from any string-like payload
    pub fn success(value: impl Into<String>) -> Self {
        Outcome::Success(value.into())
    }

    /// Returns true for a success outcome
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true for a not-implemented outcome
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Outcome::NotImplemented)
    }

    /// The success payload, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::NotImplemented => None,
        }
    }
}
