//! Tests for the model layer (Preferences, SpaceSnapshot).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use std::time::Duration;

use whichspace::model::constants::*;
use whichspace::model::{
    ActiveHint, DoubleClickAction, Preferences, RawDisplay, RawSpace, SpaceKind, SpaceSnapshot,
};
use whichspace::SpaceError;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn desktop(id: u64) -> RawSpace {
    RawSpace {
        id,
        uuid: format!("uuid-{id}"),
        kind_code: SPACE_TYPE_DESKTOP,
    }
}

fn fullscreen(id: u64) -> RawSpace {
    RawSpace {
        id,
        uuid: format!("uuid-{id}"),
        kind_code: SPACE_TYPE_FULLSCREEN,
    }
}

fn display(identifier: &str, current: u64, spaces: Vec<RawSpace>) -> RawDisplay {
    RawDisplay {
        identifier: identifier.to_string(),
        current_space: Some(current),
        spaces,
    }
}

// === Preferences Tests ===

#[test]
fn preferences_default_has_no_double_action() {
    let prefs = Preferences::default();
    assert_eq!(prefs.double_click_action, DoubleClickAction::None);
    assert!(!prefs.double_click_action.is_configured());
}

#[test]
fn preferences_default_disables_polling() {
    assert_eq!(Preferences::default().poll_period(), None);
}

#[test]
fn double_click_action_codes_round_trip() {
    for action in [
        DoubleClickAction::None,
        DoubleClickAction::MissionControl,
        DoubleClickAction::Refresh,
    ] {
        assert_eq!(DoubleClickAction::from_code(action.code()), action);
    }
}

#[test]
fn double_click_action_unknown_code_is_none() {
    assert_eq!(DoubleClickAction::from_code(42), DoubleClickAction::None);
    assert_eq!(DoubleClickAction::from_code(-1), DoubleClickAction::None);
}

#[test]
fn validate_clamps_double_click_interval() {
    let mut prefs = Preferences::default();
    prefs.double_click_interval = 10.0;
    prefs.validate();
    assert!(approx_eq(prefs.double_click_interval, MAX_DOUBLE_CLICK_INTERVAL));

    prefs.double_click_interval = 0.01;
    prefs.validate();
    assert!(approx_eq(prefs.double_click_interval, MIN_DOUBLE_CLICK_INTERVAL));
}

#[test]
fn validate_keeps_zero_and_resets_garbage() {
    let mut prefs = Preferences::default();
    prefs.poll_interval = -3.0;
    prefs.double_click_interval = f64::NAN;
    prefs.validate();
    assert!(approx_eq(prefs.poll_interval, 0.0));
    assert!(approx_eq(prefs.double_click_interval, 0.0));
}

#[test]
fn validate_clamps_poll_interval() {
    let mut prefs = Preferences::default();
    prefs.poll_interval = 0.1;
    prefs.validate();
    assert_eq!(
        prefs.poll_period(),
        Some(Duration::from_secs_f64(MIN_POLL_INTERVAL))
    );
}

#[test]
fn effective_interval_prefers_explicit_setting() {
    let mut prefs = Preferences::default();
    prefs.double_click_interval = 0.5;
    assert_eq!(
        prefs.effective_double_click_interval(Some(0.25)),
        Duration::from_millis(500)
    );
}

#[test]
fn effective_interval_falls_back_to_system_then_constant() {
    let prefs = Preferences::default();
    assert_eq!(
        prefs.effective_double_click_interval(Some(0.25)),
        Duration::from_millis(250)
    );
    assert_eq!(
        prefs.effective_double_click_interval(None),
        Duration::from_secs_f64(FALLBACK_DOUBLE_CLICK_INTERVAL)
    );
    assert_eq!(
        prefs.effective_double_click_interval(Some(0.0)),
        Duration::from_secs_f64(FALLBACK_DOUBLE_CLICK_INTERVAL)
    );
}

#[test]
fn poll_period_survives_unvalidated_values() {
    let mut prefs = Preferences::default();
    prefs.poll_interval = f64::INFINITY;
    assert_eq!(prefs.poll_period(), None);

    prefs.poll_interval = 1e300;
    assert_eq!(
        prefs.poll_period(),
        Some(Duration::from_secs_f64(MAX_POLL_INTERVAL))
    );
}

#[test]
fn effective_interval_survives_unvalidated_values() {
    let mut prefs = Preferences::default();
    prefs.double_click_interval = f64::INFINITY;
    assert_eq!(
        prefs.effective_double_click_interval(Some(0.25)),
        Duration::from_millis(250)
    );

    prefs.double_click_interval = 1e300;
    assert_eq!(
        prefs.effective_double_click_interval(None),
        Duration::from_secs_f64(MAX_DOUBLE_CLICK_INTERVAL)
    );

    prefs.double_click_interval = 0.0;
    for system in [f64::INFINITY, f64::NAN, 1e300] {
        assert_eq!(
            prefs.effective_double_click_interval(Some(system)),
            Duration::from_secs_f64(FALLBACK_DOUBLE_CLICK_INTERVAL)
        );
    }
}

#[test]
fn preferences_default_highlights_on_click() {
    assert!(Preferences::default().highlight_on_click);
}

// === Snapshot Tests ===

#[test]
fn snapshot_three_spaces_second_active() {
    let displays = vec![display("Main", 2, vec![desktop(1), desktop(2), desktop(3)])];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    assert_eq!(snap.spaces().len(), 3);
    assert_eq!(snap.label(), "2");
    assert_eq!(snap.active().id, 2);
    assert_eq!(snap.active().kind, SpaceKind::Desktop);
}

#[test]
fn snapshot_empty_list_is_an_error() {
    assert_eq!(
        SpaceSnapshot::from_displays(&[], &ActiveHint::default()),
        Err(SpaceError::EmptySpaceList)
    );
    let displays = vec![display("Main", 1, vec![])];
    assert_eq!(
        SpaceSnapshot::from_displays(&displays, &ActiveHint::default()),
        Err(SpaceError::EmptySpaceList)
    );
}

#[test]
fn snapshot_without_current_space_is_an_error() {
    let displays = vec![RawDisplay {
        identifier: "Main".to_string(),
        current_space: None,
        spaces: vec![desktop(1)],
    }];
    assert_eq!(
        SpaceSnapshot::from_displays(&displays, &ActiveHint::default()),
        Err(SpaceError::NoActiveSpace)
    );
}

#[test]
fn snapshot_ordinals_run_across_displays() {
    let displays = vec![
        display("A", 1, vec![desktop(1), desktop(2)]),
        display("B", 10, vec![desktop(10), desktop(11)]),
    ];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    let ordinals: Vec<_> = snap.spaces().iter().map(|s| s.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2, 3, 4]);
    assert_eq!(snap.spaces()[2].display, "B");
    assert_eq!(snap.spaces()[3].desktop_number, Some(4));
}

#[test]
fn snapshot_menu_bar_display_wins() {
    let displays = vec![
        display("A", 1, vec![desktop(1), desktop(2)]),
        display("B", 11, vec![desktop(10), desktop(11)]),
    ];
    let hint = ActiveHint {
        menu_bar_display: Some("B".to_string()),
        window_spaces: vec![1],
    };
    let snap = SpaceSnapshot::from_displays(&displays, &hint).unwrap();
    assert_eq!(snap.label(), "4");
}

#[test]
fn snapshot_prefers_main_display_without_hints() {
    let displays = vec![
        display("External", 5, vec![desktop(5)]),
        display("Main", 2, vec![desktop(1), desktop(2)]),
    ];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    assert_eq!(snap.label(), "3");
}

#[test]
fn snapshot_falls_back_to_first_display() {
    let displays = vec![
        display("X", 2, vec![desktop(1), desktop(2)]),
        display("Y", 3, vec![desktop(3)]),
    ];
    let hint = ActiveHint {
        menu_bar_display: Some("gone".to_string()),
        window_spaces: vec![],
    };
    let snap = SpaceSnapshot::from_displays(&displays, &hint).unwrap();
    assert_eq!(snap.label(), "2");
}

#[test]
fn snapshot_fullscreen_space_can_be_active() {
    let displays = vec![display("Main", 9, vec![desktop(1), fullscreen(9)])];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    assert_eq!(snap.label(), FULLSCREEN_LABEL);
    assert_eq!(snap.active().kind, SpaceKind::Fullscreen);
    assert!(!snap.active().is_switchable());
    assert_eq!(snap.active().title(), "Fullscreen");
}

#[test]
fn snapshot_desktop_after_fullscreen_keeps_mission_control_number() {
    let displays = vec![display("Main", 3, vec![desktop(1), fullscreen(2), desktop(3)])];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    let active = snap.active();
    assert_eq!(active.ordinal, 3);
    assert_eq!(active.desktop_number, Some(2));
    assert_eq!(snap.label(), "2");
    assert_eq!(active.title(), "Desktop 2");
}

#[test]
fn snapshot_desktop_numbers_skip_fullscreen_across_displays() {
    let displays = vec![
        display("A", 1, vec![desktop(1), fullscreen(2)]),
        display("B", 11, vec![desktop(10), desktop(11)]),
    ];
    let hint = ActiveHint {
        menu_bar_display: Some("B".to_string()),
        window_spaces: vec![],
    };
    let snap = SpaceSnapshot::from_displays(&displays, &hint).unwrap();
    assert_eq!(snap.label(), "3");
    let titles: Vec<_> = snap.spaces().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Desktop 1", "Fullscreen", "Desktop 2", "Desktop 3"]);
}

#[test]
fn snapshot_unknown_space_kind_shows_placeholder() {
    let other = RawSpace {
        id: 5,
        uuid: "uuid-5".to_string(),
        kind_code: 2,
    };
    let displays = vec![display("Main", 5, vec![desktop(1), other])];
    let snap = SpaceSnapshot::from_displays(&displays, &ActiveHint::default()).unwrap();
    assert_eq!(snap.label(), PLACEHOLDER_LABEL);
    assert_eq!(snap.active().title(), "Space 2");
}
