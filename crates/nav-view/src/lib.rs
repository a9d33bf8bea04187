//! Host-agnostic rendering for NavStack
//!
//! This crate renders a route list into a tree of nested presentation
//! containers and writes user dismissals back into that list. The view type
//! is chosen by the host framework; NavStack only decides what goes where.
//!
//! # Modules
//!
//! - [`binding`] - Shared, host-owned route list
//! - [`nav_stack`] - The navigation stack component
//! - [`render`] - Rendered tree handed to the host
//! - [`handle`] - Per-node presentation flags and stack path write-back
//!
//! # Example
//!
//! ```rust
//! use nav_core::Route;
//! use nav_view::{NavStack, RouteBinding};
//!
//! let routes = RouteBinding::new(vec![Route::push("inbox"), Route::sheet("compose")]);
//! let nav = NavStack::new(routes.clone(), || "home".to_string(), |d: &&str| d.to_string());
//!
//! let body = nav.body();
//! assert!(body.handle.sheet_presented());
//!
//! // The user swipes the sheet away.
//! body.handle.dismiss().unwrap();
//! assert_eq!(routes.routes(), vec![Route::push("inbox")]);
//! assert!(nav.body().presentation.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod handle;
pub mod nav_stack;
pub mod render;

pub use binding::RouteBinding;
pub use handle::{ModalState, NodeHandle};
pub use nav_stack::NavStack;
pub use render::{ModalPresentation, RenderedNode, StackContainer};
