//! Shared route list
//!
//! The route list is owned by the host. [`RouteBinding`] is a cheap handle to
//! it that the host keeps for pushing new routes and that rendered nodes keep
//! for writing dismissals back. Every write bumps a generation counter, which
//! lets a handle detect that it was rendered from routes that have since
//! changed.

use nav_core::{NavError, Result, Route, RouteEdit};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

struct RouteState<D> {
    routes: Vec<Route<D>>,
    generation: u64,
}

/// Handle to a host-owned route list
pub struct RouteBinding<D> {
    id: Uuid,
    state: Arc<RwLock<RouteState<D>>>,
}

impl<D> RouteBinding<D> {
    /// Create a binding over an initial route list
    pub fn new(routes: Vec<Route<D>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Arc::new(RwLock::new(RouteState { routes, generation: 0 })),
        }
    }

    /// Unique id of this route list, shared by all clones
    ///
    /// Hosts driving several stacks (one per tab, say) use it to tell their
    /// bindings apart; it is also attached to every log line.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current generation; increases on every write
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.state.read().routes.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.state.read().routes.is_empty()
    }

    /// Read the routes without copying them
    pub fn with<R>(&self, f: impl FnOnce(&[Route<D>]) -> R) -> R {
        f(&self.state.read().routes)
    }

    /// Mutate the routes as their owner
    ///
    /// Always counts as a write and bumps the generation, even when `f`
    /// leaves the list untouched. Use [`RouteBinding::with`] for reads, so
    /// handles rendered before stay current under `reject_stale_writes`.
    pub fn update<R>(&self, f: impl FnOnce(&mut Vec<Route<D>>) -> R) -> R {
        let mut state = self.state.write();
        let result = f(&mut state.routes);
        state.generation += 1;
        result
    }

    /// Replace the routes
    pub fn set(&self, routes: Vec<Route<D>>) {
        self.update(|current| *current = routes);
    }

    /// Apply a shrinking edit issued by a node rendered at `rendered`
    ///
    /// Returns the number of routes removed. With `reject_stale` set, an edit
    /// from an older generation is refused and the list is left untouched.
    pub fn apply(&self, edit: &RouteEdit, rendered: u64, reject_stale: bool) -> Result<usize> {
        let mut state = self.state.write();

        if reject_stale && state.generation != rendered {
            tracing::warn!(
                binding = %self.id,
                rendered,
                current = state.generation,
                ?edit,
                "rejecting write-back from stale render"
            );
            return Err(NavError::StaleRender {
                rendered,
                current: state.generation,
            });
        }

        let removed = edit.apply(&mut state.routes);
        if removed > 0 {
            state.generation += 1;
        }
        Ok(removed)
    }
}

impl<D: Clone> RouteBinding<D> {
    /// Copy of the routes
    pub fn routes(&self) -> Vec<Route<D>> {
        self.state.read().routes.clone()
    }

    /// Copy of the routes together with the generation they belong to
    pub fn snapshot(&self) -> (Vec<Route<D>>, u64) {
        let state = self.state.read();
        (state.routes.clone(), state.generation)
    }
}

impl<D> Clone for RouteBinding<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: Arc::clone(&self.state),
        }
    }
}

impl<D> Default for RouteBinding<D> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<D: fmt::Debug> fmt::Debug for RouteBinding<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("RouteBinding")
            .field("id", &self.id)
            .field("generation", &state.generation)
            .field("routes", &state.routes)
            .finish()
    }
}
