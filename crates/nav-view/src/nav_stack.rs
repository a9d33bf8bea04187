//! NavStack component
//!
//! Binds a host-owned route list to a root view factory and a destination
//! view factory. Every call to [`NavStack::body`] re-derives the node chain
//! from the current routes and renders it recursively, outermost node first.

use nav_core::{derive, NavStackConfig, Node, NodeChain, NodeId, Route};
use std::fmt;
use std::hash::Hash;

use crate::binding::RouteBinding;
use crate::handle::NodeHandle;
use crate::render::{ModalPresentation, RenderedNode, StackContainer};

type RootFactory<V> = Box<dyn Fn() -> V>;
type DestinationFactory<D, V> = Box<dyn Fn(&D) -> V>;

/// Declarative navigation stack
pub struct NavStack<D, V> {
    routes: RouteBinding<D>,
    root: RootFactory<V>,
    destination: DestinationFactory<D, V>,
    config: NavStackConfig,
}

impl<D, V> NavStack<D, V>
where
    D: Clone + Eq + Hash,
{
    /// Create a stack over `routes`
    ///
    /// # Arguments
    ///
    /// * `routes` - Host-owned route list
    /// * `root` - Builds the root view
    /// * `destination` - Builds the view for a destination
    pub fn new(
        routes: RouteBinding<D>,
        root: impl Fn() -> V + 'static,
        destination: impl Fn(&D) -> V + 'static,
    ) -> Self {
        Self {
            routes,
            root: Box::new(root),
            destination: Box::new(destination),
            config: NavStackConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: NavStackConfig) -> Self {
        self.config = config;
        self
    }

    /// The bound route list
    pub fn routes(&self) -> &RouteBinding<D> {
        &self.routes
    }

    /// Active configuration
    pub fn config(&self) -> &NavStackConfig {
        &self.config
    }

    /// Node chain for the current routes
    pub fn chain(&self) -> NodeChain<D> {
        self.routes.with(derive)
    }

    /// Render the current routes
    pub fn body(&self) -> RenderedNode<V, D> {
        let (routes, generation) = self.routes.snapshot();
        let chain = derive(&routes);

        tracing::debug!(
            binding = %self.routes.id(),
            generation,
            routes = routes.len(),
            modals = chain.modal_depth(),
            "rendering navigation stack"
        );

        self.render(&chain, chain.root(), (self.root)(), generation)
    }

    fn render(&self, chain: &NodeChain<D>, id: NodeId, content: V, generation: u64) -> RenderedNode<V, D> {
        let details = chain.get(id).map(Node::details).unwrap_or_default();
        let stack = StackContainer {
            path: details.to_vec(),
            screens: details
                .iter()
                .map(|detail| (self.destination)(&detail.destination))
                .collect(),
        };

        let presentation = match (chain.next(id), chain.next_node(id)) {
            (Some(next), Some(Node::Destination { route, .. })) => {
                let node = Box::new(self.render(
                    chain,
                    next,
                    (self.destination)(route.destination()),
                    generation,
                ));
                match route {
                    Route::Overlay(_) => Some(ModalPresentation::Overlay(node)),
                    Route::Sheet { on_dismiss, .. } => Some(ModalPresentation::Sheet {
                        node,
                        on_dismiss: on_dismiss.clone(),
                    }),
                    Route::Cover { on_dismiss, .. } => Some(ModalPresentation::Cover {
                        node,
                        on_dismiss: on_dismiss.clone(),
                    }),
                    // Pushes never open a node; they live in the stack path.
                    Route::Push(_) => None,
                }
            }
            _ => None,
        };

        RenderedNode {
            content,
            stack,
            presentation,
            handle: NodeHandle::new(chain, id, self.routes.clone(), self.config.clone(), generation),
        }
    }
}

impl<D: fmt::Debug, V> fmt::Debug for NavStack<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavStack")
            .field("routes", &self.routes)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
