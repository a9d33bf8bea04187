//! Route definitions
//!
//! A [`Route`] pairs a destination value with the way it is presented:
//! pushed onto the current stack, drawn as an overlay, or presented modally
//! as a sheet or full-screen cover.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// =============================================================================
// Dismiss Callback
// =============================================================================

/// Callback fired after a sheet or cover has been dismissed
#[derive(Clone)]
pub struct DismissHandler(Arc<dyn Fn() + Send + Sync>);

impl DismissHandler {
    /// Wrap a closure
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback
    pub fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for DismissHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DismissHandler")
    }
}

// =============================================================================
// Route
// =============================================================================

/// How a route is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Pushed onto the enclosing navigation stack
    Push,
    /// Drawn on top of the presenting screen, always visible
    Overlay,
    /// Modal sheet
    Sheet,
    /// Modal full-screen cover
    Cover,
}

/// A destination together with its presentation style
#[derive(Debug, Clone)]
pub enum Route<D> {
    /// Push onto the current stack
    Push(D),
    /// Show as an overlay
    Overlay(D),
    /// Present as a sheet
    Sheet {
        /// Destination to present
        destination: D,
        /// Called after the sheet is dismissed
        on_dismiss: Option<DismissHandler>,
    },
    /// Present as a full-screen cover
    Cover {
        /// Destination to present
        destination: D,
        /// Called after the cover is dismissed
        on_dismiss: Option<DismissHandler>,
    },
}

impl<D> Route<D> {
    /// Push route
    pub fn push(destination: D) -> Self {
        Route::Push(destination)
    }

    /// Overlay route
    pub fn overlay(destination: D) -> Self {
        Route::Overlay(destination)
    }

    /// Sheet route without a dismiss callback
    pub fn sheet(destination: D) -> Self {
        Route::Sheet { destination, on_dismiss: None }
    }

    /// Sheet route with a dismiss callback
    pub fn sheet_with_dismiss(destination: D, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        Route::Sheet {
            destination,
            on_dismiss: Some(DismissHandler::new(on_dismiss)),
        }
    }

    /// Cover route without a dismiss callback
    pub fn cover(destination: D) -> Self {
        Route::Cover { destination, on_dismiss: None }
    }

    /// Cover route with a dismiss callback
    pub fn cover_with_dismiss(destination: D, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        Route::Cover {
            destination,
            on_dismiss: Some(DismissHandler::new(on_dismiss)),
        }
    }

    /// The destination carried by this route
    pub fn destination(&self) -> &D {
        match self {
            Route::Push(destination)
            | Route::Overlay(destination)
            | Route::Sheet { destination, .. }
            | Route::Cover { destination, .. } => destination,
        }
    }

    /// Consume the route, returning its destination
    pub fn into_destination(self) -> D {
        match self {
            Route::Push(destination)
            | Route::Overlay(destination)
            | Route::Sheet { destination, .. }
            | Route::Cover { destination, .. } => destination,
        }
    }

    /// Dismiss callback, only ever present on sheets and covers
    pub fn on_dismiss(&self) -> Option<&DismissHandler> {
        match self {
            Route::Sheet { on_dismiss, .. } | Route::Cover { on_dismiss, .. } => on_dismiss.as_ref(),
            Route::Push(_) | Route::Overlay(_) => None,
        }
    }

    /// Presentation style of this route
    pub fn presentation(&self) -> Presentation {
        match self {
            Route::Push(_) => Presentation::Push,
            Route::Overlay(_) => Presentation::Overlay,
            Route::Sheet { .. } => Presentation::Sheet,
            Route::Cover { .. } => Presentation::Cover,
        }
    }

    /// Whether this route continues the current stack
    pub fn is_push(&self) -> bool {
        matches!(self, Route::Push(_))
    }

    /// Whether this route is presented modally (sheet or cover)
    pub fn is_modal(&self) -> bool {
        matches!(self, Route::Sheet { .. } | Route::Cover { .. })
    }
}

// Routes compare and hash by destination alone.
impl<D: PartialEq> PartialEq for Route<D> {
    fn eq(&self, other: &Self) -> bool {
        self.destination() == other.destination()
    }
}

impl<D: Eq> Eq for Route<D> {}

impl<D: Hash> Hash for Route<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.destination().hash(state);
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[derive(Serialize)]
#[serde(tag = "presentation", content = "destination", rename_all = "lowercase")]
enum RouteRef<'a, D> {
    Push(&'a D),
    Overlay(&'a D),
    Sheet(&'a D),
    Cover(&'a D),
}

#[derive(Deserialize)]
#[serde(tag = "presentation", content = "destination", rename_all = "lowercase")]
enum RouteRepr<D> {
    Push(D),
    Overlay(D),
    Sheet(D),
    Cover(D),
}

impl<D: Serialize> Serialize for Route<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let repr = match self {
            Route::Push(destination) => RouteRef::Push(destination),
            Route::Overlay(destination) => RouteRef::Overlay(destination),
            Route::Sheet { destination, .. } => RouteRef::Sheet(destination),
            Route::Cover { destination, .. } => RouteRef::Cover(destination),
        };
        repr.serialize(serializer)
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for Route<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> std::result::Result<Self, De::Error> {
        // Callbacks are not persisted, so restored modals come back without one.
        Ok(match RouteRepr::deserialize(deserializer)? {
            RouteRepr::Push(destination) => Route::push(destination),
            RouteRepr::Overlay(destination) => Route::overlay(destination),
            RouteRepr::Sheet(destination) => Route::sheet(destination),
            RouteRepr::Cover(destination) => Route::cover(destination),
        })
    }
}

/// Serialize a route list to JSON
pub fn routes_to_json<D: Serialize>(routes: &[Route<D>]) -> crate::Result<String> {
    serde_json::to_string(routes).map_err(crate::NavError::Serialization)
}

/// Restore a route list from JSON produced by [`routes_to_json`]
pub fn routes_from_json<D: serde::de::DeserializeOwned>(json: &str) -> crate::Result<Vec<Route<D>>> {
    serde_json::from_str(json).map_err(crate::NavError::Serialization)
}

// =============================================================================
// Tests
// =============================================================================
