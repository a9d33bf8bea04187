//! Per-node write-back
//!
//! A [`NodeHandle`] is what a rendered node hands to the host framework in
//! place of two-way bindings: the presentation flag of whatever the node
//! presents, and the path of the node's own navigation stack. Reads answer
//! from the render the handle came from. Writes go straight to the shared
//! route list and only ever remove routes.

use nav_core::reconcile::{plan_dismiss, plan_stack_change};
use nav_core::{Detail, DismissHandler, NavStackConfig, Node, NodeChain, NodeId, Presentation, Result};
use std::hash::Hash;

use crate::binding::RouteBinding;

/// Modal presentation state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Nothing presented modally
    Hidden,
    /// A sheet or cover is presented
    Shown,
}

/// Write-back handle for one rendered node
#[derive(Debug, Clone)]
pub struct NodeHandle<D> {
    binding: RouteBinding<D>,
    config: NavStackConfig,
    generation: u64,
    details: Vec<Detail<D>>,
    next: Option<NextRoute>,
}

#[derive(Debug, Clone)]
struct NextRoute {
    index: usize,
    presentation: Presentation,
    on_dismiss: Option<DismissHandler>,
}

impl<D: Clone> NodeHandle<D> {
    /// Handle for node `id` of a chain derived at `generation`
    pub fn new(
        chain: &NodeChain<D>,
        id: NodeId,
        binding: RouteBinding<D>,
        config: NavStackConfig,
        generation: u64,
    ) -> Self {
        let details = chain.get(id).map(|node| node.details().to_vec()).unwrap_or_default();

        let next = match chain.next_node(id) {
            Some(Node::Destination { route, index, .. }) => Some(NextRoute {
                index: *index,
                presentation: route.presentation(),
                on_dismiss: route.on_dismiss().cloned(),
            }),
            _ => None,
        };

        Self {
            binding,
            config,
            generation,
            details,
            next,
        }
    }
}

impl<D> NodeHandle<D> {
    /// Whether this node presents anything at all
    pub fn is_presented(&self) -> bool {
        self.next.is_some()
    }

    /// Presentation of the next node
    pub fn next_presentation(&self) -> Option<Presentation> {
        self.next.as_ref().map(|next| next.presentation)
    }

    /// Whether a sheet is presented from this node
    pub fn sheet_presented(&self) -> bool {
        self.next_presentation() == Some(Presentation::Sheet)
    }

    /// Whether a full-screen cover is presented from this node
    pub fn cover_presented(&self) -> bool {
        self.next_presentation() == Some(Presentation::Cover)
    }

    /// Whether an overlay is drawn on this node
    pub fn has_overlay(&self) -> bool {
        self.next_presentation() == Some(Presentation::Overlay)
    }

    /// Modal state, shown only for sheets and covers
    pub fn modal_state(&self) -> ModalState {
        if self.sheet_presented() || self.cover_presented() {
            ModalState::Shown
        } else {
            ModalState::Hidden
        }
    }

    /// Generation of the routes this handle was rendered from
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Path of this node's navigation stack
    pub fn path(&self) -> &[Detail<D>] {
        &self.details
    }

    /// Platform write to the presentation flag
    ///
    /// Hiding the next node drops its route and everything after it, then
    /// fires the route's dismiss callback. Showing is driven by the route
    /// owner, so `true` is ignored, as is any write when nothing is presented.
    pub fn set_presented(&self, presented: bool) -> Result<()> {
        let Some(next) = self.next.as_ref().filter(|_| !presented) else {
            return Ok(());
        };

        let removed = self.binding.apply(
            &plan_dismiss(next.index),
            self.generation,
            self.config.reject_stale_writes,
        )?;

        if removed > 0 {
            tracing::info!(
                binding = %self.binding.id(),
                presentation = ?next.presentation,
                index = next.index,
                removed,
                "dismissed presented route"
            );
            if self.config.notify_on_dismiss {
                if let Some(on_dismiss) = &next.on_dismiss {
                    on_dismiss.call();
                }
            }
        }
        Ok(())
    }

    /// Dismiss whatever this node presents
    pub fn dismiss(&self) -> Result<()> {
        self.set_presented(false)
    }
}

impl<D: Eq + Hash> NodeHandle<D> {
    /// Platform write to this node's stack path
    ///
    /// A shorter path removes the popped routes; anything else is ignored.
    pub fn set_path(&self, path: &[Detail<D>]) -> Result<()> {
        let edit = plan_stack_change(&self.details, path, self.config.stack_diff);
        if edit.is_noop(self.binding.len()) {
            return Ok(());
        }

        let removed = self.binding.apply(&edit, self.generation, self.config.reject_stale_writes)?;
        tracing::debug!(binding = %self.binding.id(), removed, "stack path shrank");
        Ok(())
    }

    /// Pop the top `count` screens of this node's stack
    pub fn pop(&self, count: usize) -> Result<()> {
        let keep = self.details.len().saturating_sub(count);
        self.set_path(&self.details[..keep])
    }
}
