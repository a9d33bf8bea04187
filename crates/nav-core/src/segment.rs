//! Route segmentation
//!
//! Splits the flat route list into segments. The first segment is always the
//! root screen; every non-push route opens a new modal segment. Push routes
//! are collected as [`Detail`]s by whichever segment is open when they occur,
//! so each segment owns the back stack of its own navigation container.

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// A pushed route inside a segment's stack
///
/// `index` is the position of the route in the full route list. It makes two
/// pushes of the same destination distinct entries in the platform back stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail<D> {
    /// Destination pushed
    pub destination: D,
    /// Absolute position in the route list
    pub index: usize,
}

impl<D> Detail<D> {
    /// Create a detail
    pub fn new(destination: D, index: usize) -> Self {
        Self { destination, index }
    }
}

/// One presentation context: the root screen or a modally presented screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<D> {
    /// Root screen and the routes pushed on top of it
    Root {
        /// Pushed routes, in list order
        details: Vec<Detail<D>>,
    },
    /// Overlay, sheet or cover and the routes pushed inside it
    Modal {
        /// The route that opened this segment
        route: Route<D>,
        /// Position of `route` in the route list
        index: usize,
        /// Pushed routes, in list order
        details: Vec<Detail<D>>,
    },
}

impl<D> Segment<D> {
    /// Empty root segment
    pub fn root() -> Self {
        Segment::Root { details: Vec::new() }
    }

    /// Modal segment opened by `route` at `index`
    pub fn modal(route: Route<D>, index: usize) -> Self {
        Segment::Modal {
            route,
            index,
            details: Vec::new(),
        }
    }

    /// Pushed routes of this segment
    pub fn details(&self) -> &[Detail<D>] {
        match self {
            Segment::Root { details } | Segment::Modal { details, .. } => details,
        }
    }

    /// Append a pushed route
    pub fn add(&mut self, detail: Detail<D>) {
        match self {
            Segment::Root { details } | Segment::Modal { details, .. } => details.push(detail),
        }
    }

    /// Route that opened the segment (`None` for the root)
    pub fn route(&self) -> Option<&Route<D>> {
        match self {
            Segment::Root { .. } => None,
            Segment::Modal { route, .. } => Some(route),
        }
    }

    /// Position of the opening route (`None` for the root)
    pub fn index(&self) -> Option<usize> {
        match self {
            Segment::Root { .. } => None,
            Segment::Modal { index, .. } => Some(*index),
        }
    }

    /// Whether this is the root segment
    pub fn is_root(&self) -> bool {
        matches!(self, Segment::Root { .. })
    }
}

/// Partition a route list into segments
///
/// Always returns at least the root segment, so an empty list yields a single
/// root with no details.
pub fn segment<D: Clone>(routes: &[Route<D>]) -> Vec<Segment<D>> {
    let mut segments = vec![Segment::root()];

    for (index, route) in routes.iter().enumerate() {
        if route.is_push() {
            tracing::trace!(index, "push absorbed into open segment");
            if let Some(open) = segments.last_mut() {
                open.add(Detail::new(route.destination().clone(), index));
            }
        } else {
            tracing::trace!(index, presentation = ?route.presentation(), "opening segment");
            segments.push(Segment::modal(route.clone(), index));
        }
    }

    segments
}

// =============================================================================
// Tests
// =============================================================================
