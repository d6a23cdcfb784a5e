//! Handler trait for method channels

use crate::call::{MethodCall, Outcome};

/// Handles calls dispatched on a method channel.
///
/// Handlers are plain trait objects; dispatch is synchronous and
/// single-threaded, so no `Send`/`Sync` bounds are required. A handler must
/// return exactly one [`Outcome`] per call; the signature makes anything
/// else unrepresentable.
pub trait MethodCallHandler {
    /// Handle one call and produce its outcome
    fn handle(&self, call: &MethodCall) -> Outcome;
}

impl<F> MethodCallHandler for F
where
    F: Fn(&MethodCall) -> Outcome,
{
    fn handle(&self, call: &MethodCall) -> Outcome {
        self(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_handler() {
        let handler = |call: &MethodCall| {
            if call.method() == "ping" {
                Outcome::success("pong")
            } else {
                Outcome::NotImplemented
            }
        };

        assert_eq!(
            handler.handle(&MethodCall::new("ping")),
            Outcome::success("pong")
        );
        assert!(handler.handle(&MethodCall::new("other")).is_not_implemented());
    }
}
