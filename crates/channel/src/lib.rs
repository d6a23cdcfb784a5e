//! Synchronous method channels for the Xiangqi platform bridge
//!
//! A method channel is a named path over which the UI layer sends named
//! requests to the native side. This crate provides the native half:
//!
//! - [`MethodCall`] and [`Outcome`]: one request, exactly one reply
//! - [`MethodCallHandler`]: the trait a responder implements
//! - [`ChannelHost`]: owns the channel-to-handler bindings and dispatches
//!   each call synchronously
//!
//! The host is a plain value owned by the embedder; there is no process-wide
//! registry. Dispatch is single-threaded and cooperative: a call is handled
//! and replied to before the next one is accepted, so handlers need no
//! synchronization.
//!
//! # Example
//!
//! ```rust
//! use xiangqi_channel::{ChannelHost, MethodCall, Outcome};
//!
//! let mut host = ChannelHost::new();
//! host.register("demo/echo", |call: &MethodCall| {
//!     Outcome::success(call.method().to_string())
//! });
//!
//! let reply = host.invoke("demo/echo", &MethodCall::new("ping"));
//! assert_eq!(reply, Outcome::Success("ping".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod call;
mod handler;
mod host;

pub use call::{MethodCall, Outcome};
pub use handler::MethodCallHandler;
pub use host::ChannelHost;
