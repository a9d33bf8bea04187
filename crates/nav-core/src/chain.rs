//! Node chain
//!
//! Segments are folded back-to-front into a chain of nodes, starting from the
//! [`Node::End`] sentinel. Every node links to the node after it, which is
//! what it presents as an overlay, sheet or cover.
//!
//! Nodes live in an arena and link through [`NodeId`]s. The arena is filled in
//! fold order, so the sentinel is always at id `0` and the root node is last.

use crate::route::{Presentation, Route};
use crate::segment::{Detail, Segment};

/// Index of a node in a [`NodeChain`]
pub type NodeId = usize;

/// A renderable node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<D> {
    /// Root screen
    Root {
        /// Pushed routes of the root stack
        details: Vec<Detail<D>>,
        /// Node presented from the root
        next: NodeId,
    },
    /// Overlay, sheet or cover
    Destination {
        /// Route that opened this node
        route: Route<D>,
        /// Position of `route` in the route list
        index: usize,
        /// Pushed routes of this node's stack
        details: Vec<Detail<D>>,
        /// Node presented from this one
        next: NodeId,
    },
    /// Sentinel after the innermost node
    End,
}

impl<D> Node<D> {
    /// Pushed routes of the node's stack (empty for the sentinel)
    pub fn details(&self) -> &[Detail<D>] {
        match self {
            Node::Root { details, .. } | Node::Destination { details, .. } => details,
            Node::End => &[],
        }
    }

    /// Next node, `None` for the sentinel
    pub fn next(&self) -> Option<NodeId> {
        match self {
            Node::Root { next, .. } | Node::Destination { next, .. } => Some(*next),
            Node::End => None,
        }
    }

    /// Route of a destination node
    pub fn route(&self) -> Option<&Route<D>> {
        match self {
            Node::Destination { route, .. } => Some(route),
            _ => None,
        }
    }

    /// Route list position of a destination node
    pub fn index(&self) -> Option<usize> {
        match self {
            Node::Destination { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Presentation of a destination node
    pub fn presentation(&self) -> Option<Presentation> {
        self.route().map(Route::presentation)
    }

    /// Whether this is the sentinel
    pub fn is_end(&self) -> bool {
        matches!(self, Node::End)
    }
}

/// Linked chain of nodes derived from a route list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeChain<D> {
    nodes: Vec<Node<D>>,
}

impl<D> NodeChain<D> {
    /// Build the chain from segments
    pub fn from_segments(segments: Vec<Segment<D>>) -> Self {
        let mut nodes = Vec::with_capacity(segments.len() + 1);
        nodes.push(Node::End);

        for segment in segments.into_iter().rev() {
            let next = nodes.len() - 1;
            let node = match segment {
                Segment::Root { details } => Node::Root { details, next },
                Segment::Modal { route, index, details } => Node::Destination {
                    route,
                    index,
                    details,
                    next,
                },
            };
            nodes.push(node);
        }

        tracing::debug!(nodes = nodes.len(), "derived node chain");
        Self { nodes }
    }

    /// Id of the outermost node
    pub fn root(&self) -> NodeId {
        self.nodes.len() - 1
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&Node<D>> {
        self.nodes.get(id)
    }

    /// Id of the node after `id`
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::next)
    }

    /// The node after `id`, resolved
    pub fn next_node(&self, id: NodeId) -> Option<&Node<D>> {
        self.next(id).and_then(|next| self.get(next))
    }

    /// Walk from the root to the sentinel
    pub fn iter(&self) -> ChainIter<'_, D> {
        ChainIter {
            chain: self,
            cursor: Some(self.root()),
        }
    }

    /// Number of nodes, sentinel included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a chain holds at least the root and the sentinel
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of overlay, sheet and cover nodes
    pub fn modal_depth(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Destination { .. }))
            .count()
    }

    /// Destination on top of everything, `None` when only the root shows
    pub fn top_destination(&self) -> Option<&D> {
        let innermost = self.iter().filter(|(_, node)| !node.is_end()).last()?.1;

        match innermost.details().last() {
            Some(detail) => Some(&detail.destination),
            None => innermost.route().map(Route::destination),
        }
    }
}

/// Iterator over a chain, outermost node first
pub struct ChainIter<'a, D> {
    chain: &'a NodeChain<D>,
    cursor: Option<NodeId>,
}

impl<'a, D> Iterator for ChainIter<'a, D> {
    type Item = (NodeId, &'a Node<D>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.chain.get(id)?;
        self.cursor = node.next();
        Some((id, node))
    }
}

// =============================================================================
// Tests
// =============================================================================
