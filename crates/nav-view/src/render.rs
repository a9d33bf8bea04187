//! Rendered tree
//!
//! The output of a [`NavStack`](crate::NavStack) render. Each node carries its
//! own content, the navigation container for its pushed screens, and at most
//! one nested node presented as an overlay, sheet or cover. The host maps this
//! tree onto its own widgets.

use nav_core::{Detail, DismissHandler, Presentation};

use crate::handle::NodeHandle;

/// Navigation container of a node
#[derive(Debug)]
pub struct StackContainer<V, D> {
    /// Back stack handed to the platform container
    pub path: Vec<Detail<D>>,
    /// One rendered screen per entry of `path`
    pub screens: Vec<V>,
}

impl<V, D> StackContainer<V, D> {
    /// Number of pushed screens
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Top-most pushed screen
    pub fn top(&self) -> Option<&V> {
        self.screens.last()
    }
}

/// Surface the next node is presented in
#[derive(Debug)]
pub enum ModalPresentation<V, D> {
    /// Always-visible overlay
    Overlay(Box<RenderedNode<V, D>>),
    /// Sheet
    Sheet {
        /// Presented node
        node: Box<RenderedNode<V, D>>,
        /// Callback the host fires once the sheet is gone
        on_dismiss: Option<DismissHandler>,
    },
    /// Full-screen cover
    Cover {
        /// Presented node
        node: Box<RenderedNode<V, D>>,
        /// Callback the host fires once the cover is gone
        on_dismiss: Option<DismissHandler>,
    },
}

impl<V, D> ModalPresentation<V, D> {
    /// Presented node
    pub fn node(&self) -> &RenderedNode<V, D> {
        match self {
            ModalPresentation::Overlay(node)
            | ModalPresentation::Sheet { node, .. }
            | ModalPresentation::Cover { node, .. } => node,
        }
    }

    /// Presentation style
    pub fn kind(&self) -> Presentation {
        match self {
            ModalPresentation::Overlay(_) => Presentation::Overlay,
            ModalPresentation::Sheet { .. } => Presentation::Sheet,
            ModalPresentation::Cover { .. } => Presentation::Cover,
        }
    }
}

/// One rendered node
#[derive(Debug)]
pub struct RenderedNode<V, D> {
    /// Root view or the destination view of the presenting route
    pub content: V,
    /// Pushed screens
    pub stack: StackContainer<V, D>,
    /// Nested node, if any
    pub presentation: Option<ModalPresentation<V, D>>,
    /// Write-back handle
    pub handle: NodeHandle<D>,
}

impl<V, D> RenderedNode<V, D> {
    /// Nested node presented from this one
    pub fn next(&self) -> Option<&RenderedNode<V, D>> {
        self.presentation.as_ref().map(ModalPresentation::node)
    }

    /// Presentation style of the nested node
    pub fn presented_kind(&self) -> Option<Presentation> {
        self.presentation.as_ref().map(ModalPresentation::kind)
    }

    /// Number of nodes from here to the innermost one, this node included
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = self;
        while let Some(next) = node.next() {
            depth += 1;
            node = next;
        }
        depth
    }

    /// Innermost presented node
    pub fn innermost(&self) -> &RenderedNode<V, D> {
        let mut node = self;
        while let Some(next) = node.next() {
            node = next;
        }
        node
    }

    /// View on top of everything: the last pushed screen of the innermost
    /// node, or its content when its stack is empty
    pub fn visible(&self) -> &V {
        let innermost = self.innermost();
        innermost.stack.top().unwrap_or(&innermost.content)
    }
}
