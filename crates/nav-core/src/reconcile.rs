//! Reconciliation of user dismissals
//!
//! The platform reports two kinds of change: a modal surface was dismissed,
//! or a navigation container's path got shorter because the user went back.
//! Both are turned into a [`RouteEdit`] that only ever removes routes from the
//! list. Appending is left to whoever owns the list.

use std::collections::HashSet;
use std::hash::Hash;

use crate::config::StackDiff;
use crate::route::Route;
use crate::segment::Detail;

/// A shrinking edit on a route list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEdit {
    /// Keep only the first `boundary` routes
    Truncate {
        /// Number of routes kept
        boundary: usize,
    },
    /// Remove the routes at these positions
    Remove {
        /// Positions to remove, ascending and unique
        indices: Vec<usize>,
    },
}

impl RouteEdit {
    /// Edit removing the given positions
    pub fn remove(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        RouteEdit::Remove { indices }
    }

    /// Whether applying the edit to a list of `len` routes changes nothing
    pub fn is_noop(&self, len: usize) -> bool {
        match self {
            RouteEdit::Truncate { boundary } => *boundary >= len,
            RouteEdit::Remove { indices } => indices.iter().all(|&index| index >= len),
        }
    }

    /// Apply the edit in place, returning how many routes were removed
    pub fn apply<D>(&self, routes: &mut Vec<Route<D>>) -> usize {
        let before = routes.len();

        match self {
            RouteEdit::Truncate { boundary } => routes.truncate(*boundary),
            RouteEdit::Remove { indices } => {
                let mut position = 0;
                routes.retain(|_| {
                    let keep = indices.binary_search(&position).is_err();
                    position += 1;
                    keep
                });
            }
        }

        let removed = before - routes.len();
        if removed > 0 {
            tracing::debug!(edit = ?self, removed, remaining = routes.len(), "applied route edit");
        }
        removed
    }
}

/// Plan the edit for dismissing the modal opened at `boundary`
pub fn plan_dismiss(boundary: usize) -> RouteEdit {
    RouteEdit::Truncate { boundary }
}

/// Plan the edit for a stack whose path changed from `current` to `remaining`
///
/// Only a shorter path is reconciled. A path of equal or greater length
/// plans an empty removal, since pushes are driven by the route owner.
pub fn plan_stack_change<D: Eq + Hash>(
    current: &[Detail<D>],
    remaining: &[Detail<D>],
    strategy: StackDiff,
) -> RouteEdit {
    if remaining.len() >= current.len() {
        return RouteEdit::Remove { indices: Vec::new() };
    }

    match strategy {
        StackDiff::ByIndex => {
            let kept: HashSet<usize> = remaining.iter().map(|detail| detail.index).collect();
            RouteEdit::remove(
                current
                    .iter()
                    .map(|detail| detail.index)
                    .filter(|index| !kept.contains(index)),
            )
        }
        StackDiff::SymmetricDifference => {
            let current: HashSet<&Detail<D>> = current.iter().collect();
            let remaining: HashSet<&Detail<D>> = remaining.iter().collect();
            RouteEdit::remove(
                current
                    .symmetric_difference(&remaining)
                    .map(|detail| detail.index),
            )
        }
    }
}

/// Routes left after dismissing the modal opened at `boundary`
///
/// Keeps the first `boundary` routes; a boundary past the end keeps them all.
pub fn apply_dismiss<D: Clone>(routes: &[Route<D>], boundary: usize) -> Vec<Route<D>> {
    let mut routes = routes.to_vec();
    plan_dismiss(boundary).apply(&mut routes);
    routes
}

/// Routes left after a stack path shrank from `current` to `remaining`
pub fn apply_stack_change<D: Clone + Eq + Hash>(
    routes: &[Route<D>],
    current: &[Detail<D>],
    remaining: &[Detail<D>],
    strategy: StackDiff,
) -> Vec<Route<D>> {
    let mut routes = routes.to_vec();
    plan_stack_change(current, remaining, strategy).apply(&mut routes);
    routes
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Presentation;
    use crate::segment::segment;

    fn details<D: Clone>(routes: &[Route<D>]) -> Vec<Detail<D>> {
        segment(routes)[0].details().to_vec()
    }

    #[test]
    fn test_dismiss_sheet_truncates() {
        let routes = vec![
            Route::push("a"),
            Route::push("b"),
            Route::sheet("c"),
            Route::push("d"),
        ];
        let result = apply_dismiss(&routes, 2);

        assert_eq!(result, vec![Route::push("a"), Route::push("b")]);
        assert!(result.iter().all(|route| route.presentation() == Presentation::Push));
    }

    #[test]
    fn test_dismiss_past_end_keeps_everything() {
        let routes = vec![Route::push(1), Route::cover(2)];
        assert_eq!(apply_dismiss(&routes, 5), routes);
        assert_eq!(apply_dismiss(&routes, 0), Vec::<Route<i32>>::new());
    }

    #[test]
    fn test_swipe_back_removes_popped_details() {
        let routes = vec![Route::push("a"), Route::push("b"), Route::push("c")];
        let current = details(&routes);
        let remaining = vec![Detail::new("a", 0)];

        let edit = plan_stack_change(&current, &remaining, StackDiff::ByIndex);
        assert_eq!(edit, RouteEdit::Remove { indices: vec![1, 2] });

        let result = apply_stack_change(&routes, &current, &remaining, StackDiff::ByIndex);
        assert_eq!(result, vec![Route::push("a")]);
    }

    #[test]
    fn test_stack_change_in_modal_segment_keeps_other_routes() {
        let routes = vec![
            Route::push("a"),
            Route::sheet("b"),
            Route::push("c"),
            Route::push("d"),
        ];
        let current = segment(&routes)[1].details().to_vec();

        let result = apply_stack_change(&routes, &current, &[], StackDiff::ByIndex);
        assert_eq!(result, vec![Route::push("a"), Route::sheet("b")]);
        assert_eq!(result[1].presentation(), Presentation::Sheet);
    }

    #[test]
    fn test_stack_growth_is_ignored() {
        let routes = vec![Route::push("a")];
        let current = details(&routes);
        let grown = vec![Detail::new("a", 0), Detail::new("z", 9)];

        for strategy in [StackDiff::ByIndex, StackDiff::SymmetricDifference] {
            let edit = plan_stack_change(&current, &grown, strategy);
            assert!(edit.is_noop(routes.len()));
            assert_eq!(apply_stack_change(&routes, &current, &grown, strategy), routes);
        }
    }

    #[test]
    fn test_equal_destinations_are_told_apart_by_index() {
        let routes = vec![Route::push("a"), Route::push("a"), Route::push("a")];
        let current = details(&routes);
        let remaining = current[..1].to_vec();

        let result = apply_stack_change(&routes, &current, &remaining, StackDiff::ByIndex);
        assert_eq!(result.len(), 1);

        let edit = plan_stack_change(&current, &remaining, StackDiff::ByIndex);
        assert_eq!(edit, RouteEdit::Remove { indices: vec![1, 2] });
    }

    #[test]
    fn test_symmetric_difference_includes_foreign_details() {
        let routes = vec![Route::push("a"), Route::push("b"), Route::push("c"), Route::push("d")];
        let current = details(&routes)[..3].to_vec();
        // A rebuilt path that lost "b" and "c" but reports a detail never rendered
        let remaining = vec![Detail::new("a", 0), Detail::new("d", 3)];

        let by_index = plan_stack_change(&current, &remaining, StackDiff::ByIndex);
        assert_eq!(by_index, RouteEdit::Remove { indices: vec![1, 2] });

        let symmetric = plan_stack_change(&current, &remaining, StackDiff::SymmetricDifference);
        assert_eq!(symmetric, RouteEdit::Remove { indices: vec![1, 2, 3] });
    }

    #[test]
    fn test_remove_edit_normalizes_indices() {
        let edit = RouteEdit::remove([3, 1, 3, 0]);
        assert_eq!(edit, RouteEdit::Remove { indices: vec![0, 1, 3] });

        let mut routes = vec![Route::push(0), Route::push(1), Route::push(2), Route::push(3)];
        assert_eq!(edit.apply(&mut routes), 3);
        assert_eq!(routes, vec![Route::push(2)]);
    }

    #[test]
    fn test_is_noop() {
        assert!(RouteEdit::Truncate { boundary: 3 }.is_noop(3));
        assert!(!RouteEdit::Truncate { boundary: 2 }.is_noop(3));
        assert!(RouteEdit::remove([]).is_noop(0));
        assert!(RouteEdit::remove([4]).is_noop(4));
        assert!(!RouteEdit::remove([0]).is_noop(1));
    }
}
