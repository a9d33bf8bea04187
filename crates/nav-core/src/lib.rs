//! Route model and derivation core for NavStack
//!
//! This crate turns an ordered list of [`Route`] values into the nested
//! presentation hierarchy a host UI renders, and maps user dismissals back
//! onto that list.
//!
//! # Pipeline
//!
//! - [`segment`] - partition the flat route list into presentation segments
//! - [`chain`] - fold the segments into a linked chain of renderable nodes
//! - [`reconcile`] - shrink the route list after a dismissal or stack pop
//!
//! # Example
//!
//! ```rust
//! use nav_core::{derive, Route};
//! use nav_core::reconcile::apply_dismiss;
//!
//! let routes = vec![
//!     Route::push("inbox"),
//!     Route::push("thread"),
//!     Route::sheet("compose"),
//!     Route::push("attachments"),
//! ];
//!
//! let chain = derive(&routes);
//! assert_eq!(chain.len(), 3);
//! assert_eq!(chain.modal_depth(), 1);
//!
//! // The sheet sits at position 2; dismissing it keeps everything before it.
//! let routes = apply_dismiss(&routes, 2);
//! assert_eq!(routes, vec![Route::push("inbox"), Route::push("thread")]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod route;
pub mod segment;

pub use chain::{Node, NodeChain, NodeId};
pub use config::{NavStackConfig, StackDiff};
pub use error::{NavError, Result};
pub use reconcile::{apply_dismiss, apply_stack_change, RouteEdit};
pub use route::{routes_from_json, routes_to_json, DismissHandler, Presentation, Route};
pub use segment::{segment, Detail, Segment};

/// Derive the node chain for a route list
///
/// Runs segmentation followed by chain construction. The result holds no
/// state beyond the routes it was derived from; call it again on every render.
pub fn derive<D: Clone>(routes: &[Route<D>]) -> NodeChain<D> {
    NodeChain::from_segments(segment(routes))
}
