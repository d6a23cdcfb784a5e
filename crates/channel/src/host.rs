//! Channel ownership and dispatch

use crate::call::{MethodCall, Outcome};
use crate::handler::MethodCallHandler;
use std::collections::HashMap;

/// Owns the channel-to-handler bindings and dispatches incoming calls.
///
/// The host is constructed once by the embedder and passed by reference to
/// whatever drives the channel; nothing in this crate registers itself into
/// ambient global state. Bindings live until replaced, unregistered, or the
/// host is dropped with the process.
#[derive(Default)]
pub struct ChannelHost {
    handlers: HashMap<String, Box<dyn MethodCallHandler>>,
}

impl ChannelHost {
    /// Create a host with no channels bound
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler as the exclusive handler of the named channel.
    ///
    /// Re-registering replaces the previous binding and returns it, matching
    /// the replace-on-rebind semantics of the hosting UI framework.
    pub fn register(
        &mut self,
        channel: impl Into<String>,
        handler: impl MethodCallHandler + 'static,
    ) -> Option<Box<dyn MethodCallHandler>> {
        let channel = channel.into();
        let displaced = self.handlers.insert(channel.clone(), Box::new(handler));
        if displaced.is_some() {
            tracing::warn!(channel = %channel, "replaced existing channel handler");
        } else {
            tracing::debug!(channel = %channel, "registered channel handler");
        }
        displaced
    }

    /// Remove and return the binding of the named channel, if any
    pub fn unregister(&mut self, channel: &str) -> Option<Box<dyn MethodCallHandler>> {
        self.handlers.remove(channel)
    }

    /// Returns true if the named channel has a handler bound
    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Dispatch one call on the named channel and return its outcome.
    ///
    /// Dispatch is synchronous: the handler runs to completion and the
    /// outcome is returned before the next call can be issued. A channel
    /// with no handler answers [`Outcome::NotImplemented`], the
    /// caller-visible equivalent of the missing-handler signal on the UI
    /// side.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Outcome {
        match self.handlers.get(channel) {
            Some(handler) => {
                tracing::debug!(channel = %channel, method = %call.method(), "dispatching call");
                handler.handle(call)
            }
            None => {
                tracing::debug!(channel = %channel, "no handler bound for channel");
                Outcome::NotImplemented
            }
        }
    }
}

impl std::fmt::Debug for ChannelHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut channels: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        channels.sort_unstable();
        f.debug_struct("ChannelHost")
            .field("channels", &channels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(call: &MethodCall) -> Outcome {
        Outcome::success(call.method().to_string())
    }

    #[test]
    fn test_register_and_invoke() {
        let mut host = ChannelHost::new();
        host.register("demo/echo", echo);

        let outcome = host.invoke("demo/echo", &MethodCall::new("hello"));
        assert_eq!(outcome, Outcome::success("hello"));
    }

    #[test]
    fn test_invoke_unbound_channel() {
        let host = ChannelHost::new();
        let outcome = host.invoke("demo/missing", &MethodCall::new("hello"));
        assert!(outcome.is_not_implemented());
    }

    #[test]
    fn test_register_replaces_previous_handler() {
        let mut host = ChannelHost::new();

        let first = host.register("demo/echo", |_: &MethodCall| Outcome::success("first"));
        assert!(first.is_none());

        let displaced = host.register("demo/echo", |_: &MethodCall| Outcome::success("second"));
        assert!(displaced.is_some());

        // The displaced handler still answers on its own
        let old = displaced.unwrap();
        assert_eq!(old.handle(&MethodCall::new("x")), Outcome::success("first"));

        // The channel now routes to the replacement
        let outcome = host.invoke("demo/echo", &MethodCall::new("x"));
        assert_eq!(outcome, Outcome::success("second"));
    }

    #[test]
    fn test_unregister() {
        let mut host = ChannelHost::new();
        host.register("demo/echo", echo);
        assert!(host.has_handler("demo/echo"));

        assert!(host.unregister("demo/echo").is_some());
        assert!(!host.has_handler("demo/echo"));
        assert!(host
            .invoke("demo/echo", &MethodCall::new("hello"))
            .is_not_implemented());
    }
}
