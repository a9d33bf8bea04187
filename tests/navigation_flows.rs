//! Navigation Flow Integration Tests
//!
//! End-to-end tests driving a NavStack the way a host framework would:
//! render, hand user gestures to the rendered handles, render again.

use nav_core::{routes_from_json, routes_to_json, NavError, NavStackConfig, Presentation, Route, StackDiff};
use nav_view::{ModalPresentation, ModalState, NavStack, RouteBinding};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Screen {
    Inbox,
    Thread(u32),
    Compose,
    Attachment(u32),
    Settings,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mail_stack(routes: &RouteBinding<Screen>) -> NavStack<Screen, String> {
    NavStack::new(routes.clone(), || "home".to_string(), |screen| format!("{screen:?}"))
}

/// Push, present, swipe back and dismiss across several renders
#[test]
fn test_full_navigation_session() {
    init_tracing();
    let routes = RouteBinding::new(vec![Route::push(Screen::Inbox)]);
    let nav = mail_stack(&routes);

    let body = nav.body();
    assert_eq!(body.visible(), "Inbox");
    assert_eq!(body.handle.modal_state(), ModalState::Hidden);

    // The host pushes a thread and opens the composer
    routes.update(|r| {
        r.push(Route::push(Screen::Thread(7)));
        r.push(Route::sheet(Screen::Compose));
        r.push(Route::push(Screen::Attachment(1)));
        r.push(Route::push(Screen::Attachment(2)));
    });

    let body = nav.body();
    assert_eq!(body.stack.screens, vec!["Inbox", "Thread(7)"]);
    assert_eq!(body.presented_kind(), Some(Presentation::Sheet));
    assert_eq!(body.handle.modal_state(), ModalState::Shown);
    let sheet = body.next().unwrap();
    assert_eq!(sheet.content, "Compose");
    assert_eq!(sheet.stack.screens, vec!["Attachment(1)", "Attachment(2)"]);
    assert_eq!(body.visible(), "Attachment(2)");

    // Back gesture inside the sheet
    sheet.handle.pop(1).unwrap();
    assert_eq!(routes.len(), 4);

    let body = nav.body();
    assert_eq!(body.visible(), "Attachment(1)");

    // Swipe the sheet away
    body.handle.set_presented(false).unwrap();
    assert_eq!(
        routes.routes(),
        vec![Route::push(Screen::Inbox), Route::push(Screen::Thread(7))]
    );

    let body = nav.body();
    assert!(body.presentation.is_none());
    assert_eq!(body.handle.modal_state(), ModalState::Hidden);
    assert_eq!(body.visible(), "Thread(7)");
}

/// Dismissing an outer cover removes every surface stacked above it
#[test]
fn test_dismissing_outer_cover_drops_nested_surfaces() {
    let dismissed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&dismissed);

    let routes = RouteBinding::new(vec![
        Route::push(Screen::Inbox),
        Route::cover_with_dismiss(Screen::Settings, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
        Route::overlay(Screen::Compose),
        Route::sheet(Screen::Thread(3)),
    ]);
    let nav = mail_stack(&routes);

    let body = nav.body();
    assert_eq!(body.depth(), 4);
    assert!(body.handle.cover_presented());
    assert!(body.next().unwrap().handle.has_overlay());

    body.handle.dismiss().unwrap();
    assert_eq!(routes.routes(), vec![Route::push(Screen::Inbox)]);
    assert_eq!(dismissed.load(Ordering::SeqCst), 1);
    assert_eq!(nav.body().depth(), 1);
}

/// With strict write-backs, a handle from a previous render cannot rewrite
/// routes changed since
#[test]
fn test_write_from_outdated_render_is_rejected() {
    let routes = RouteBinding::new(vec![Route::push(Screen::Inbox), Route::push(Screen::Thread(1))]);
    let nav = mail_stack(&routes).with_config(NavStackConfig::new().reject_stale_writes(true));

    let old = nav.body();
    routes.update(|r| r.push(Route::sheet(Screen::Compose)));

    let result = old.handle.pop(1);
    assert!(matches!(result, Err(NavError::StaleRender { rendered: 0, current: 1 })));
    assert_eq!(routes.len(), 3);

    let fresh = nav.body();
    fresh.handle.pop(1).unwrap();
    assert_eq!(
        routes.routes(),
        vec![Route::push(Screen::Inbox), Route::sheet(Screen::Compose)]
    );
}

/// A sheet torn down in one gesture clears its stack and then hides itself;
/// both writes come from the same render and both must land
#[test]
fn test_sheet_teardown_writes_from_one_render() {
    let routes = RouteBinding::new(vec![
        Route::push(Screen::Inbox),
        Route::sheet(Screen::Compose),
        Route::push(Screen::Attachment(1)),
        Route::push(Screen::Attachment(2)),
    ]);
    let nav = mail_stack(&routes);

    let body = nav.body();
    let sheet = body.next().unwrap();
    sheet.handle.set_path(&[]).unwrap();
    body.handle.set_presented(false).unwrap();

    assert_eq!(routes.routes(), vec![Route::push(Screen::Inbox)]);
    let body = nav.body();
    assert!(!body.handle.sheet_presented());
    assert!(body.presentation.is_none());
}

/// Repeated destinations pop by position, not by value
#[test]
fn test_repeated_destination_pops_the_right_entry() {
    let routes = RouteBinding::new(vec![
        Route::push(Screen::Thread(1)),
        Route::push(Screen::Thread(1)),
        Route::push(Screen::Thread(1)),
    ]);
    let nav = mail_stack(&routes);

    let body = nav.body();
    let path = body.stack.path.clone();
    body.handle.set_path(&path[..2]).unwrap();

    assert_eq!(routes.len(), 2);
    let body = nav.body();
    let indices: Vec<usize> = body.stack.path.iter().map(|d| d.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

/// Configuration loaded from JSON drives the write-back behavior
#[test]
fn test_config_from_json() {
    let config = NavStackConfig::from_json(
        r#"{"stack_diff": "symmetric_difference", "notify_on_dismiss": false}"#,
    )
    .unwrap();
    assert_eq!(config.stack_diff, StackDiff::SymmetricDifference);

    let dismissed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&dismissed);
    let routes = RouteBinding::new(vec![Route::sheet_with_dismiss(Screen::Compose, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })]);
    let nav = mail_stack(&routes).with_config(config);

    let body = nav.body();
    match &body.presentation {
        Some(ModalPresentation::Sheet { on_dismiss, .. }) => assert!(on_dismiss.is_some()),
        _ => panic!("expected a sheet"),
    }
    body.handle.dismiss().unwrap();
    assert!(routes.is_empty());
    assert_eq!(dismissed.load(Ordering::SeqCst), 0);
}

/// Route lists survive a persist and restore round
#[test]
fn test_restored_routes_render_the_same_hierarchy() {
    let routes = vec![
        Route::push(Screen::Inbox),
        Route::sheet_with_dismiss(Screen::Compose, || {}),
        Route::push(Screen::Attachment(4)),
        Route::overlay(Screen::Settings),
    ];
    let json = routes_to_json(&routes).unwrap();
    let restored: Vec<Route<Screen>> = routes_from_json(&json).unwrap();

    let original = mail_stack(&RouteBinding::new(routes)).chain();
    let restored = mail_stack(&RouteBinding::new(restored)).chain();
    assert_eq!(original, restored);

    let kinds: Vec<_> = restored.iter().filter_map(|(_, node)| node.presentation()).collect();
    assert_eq!(kinds, vec![Presentation::Sheet, Presentation::Overlay]);
}
