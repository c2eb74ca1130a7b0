//! Tests for the application shell against an in-memory space provider.

use std::cell::{Cell, RefCell};

use whichspace::model::{
    ActiveHint, RawDisplay, RawSpace, SpaceDescriptor, SpaceSnapshot, PLACEHOLDER_LABEL,
    SPACE_TYPE_DESKTOP, SPACE_TYPE_FULLSCREEN,
};
use whichspace::{Refresh, Result, SpaceError, SpaceProvider, SpaceShell};

/// One display named "Main"; switching moves its current space.
struct FakeProvider {
    spaces: RefCell<Vec<RawSpace>>,
    current: Cell<u64>,
    failure: RefCell<Option<SpaceError>>,
    switched: RefCell<Vec<usize>>,
}

impl FakeProvider {
    fn with_kinds(kinds: &[i64], current: u64) -> Self {
        let spaces = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind_code)| RawSpace {
                id: i as u64 + 1,
                uuid: format!("uuid-{}", i + 1),
                kind_code,
            })
            .collect();
        Self {
            spaces: RefCell::new(spaces),
            current: Cell::new(current),
            failure: RefCell::new(None),
            switched: RefCell::new(Vec::new()),
        }
    }

    fn desktops(count: usize, current: u64) -> Self {
        Self::with_kinds(&vec![SPACE_TYPE_DESKTOP; count], current)
    }

    fn fail_with(&self, err: SpaceError) {
        *self.failure.borrow_mut() = Some(err);
    }

    fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }
}

impl SpaceProvider for FakeProvider {
    fn spaces(&self) -> Result<SpaceSnapshot> {
        if let Some(err) = self.failure.borrow().clone() {
            return Err(err);
        }
        let displays = [RawDisplay {
            identifier: "Main".to_string(),
            current_space: Some(self.current.get()),
            spaces: self.spaces.borrow().clone(),
        }];
        SpaceSnapshot::from_displays(&displays, &ActiveHint::default())
    }

    fn switch_to(&self, space: &SpaceDescriptor) -> Result<()> {
        self.switched.borrow_mut().push(space.ordinal);
        self.current.set(space.id);
        Ok(())
    }
}

#[test]
fn label_starts_as_placeholder() {
    let shell = SpaceShell::new(FakeProvider::desktops(3, 2));
    assert_eq!(shell.label(), PLACEHOLDER_LABEL);
    assert!(shell.snapshot().is_none());
    assert!(shell.menu_entries().is_empty());
}

#[test]
fn three_spaces_second_active_then_switch_to_third() {
    let mut shell = SpaceShell::new(FakeProvider::desktops(3, 2));

    assert_eq!(shell.refresh(), Refresh::Changed);
    assert_eq!(shell.label(), "2");

    shell.switch_to(3).unwrap();
    assert_eq!(shell.refresh(), Refresh::Changed);
    assert_eq!(shell.label(), "3");
    assert_eq!(*shell.provider().switched.borrow(), vec![3]);
}

#[test]
fn label_matches_most_recent_successful_query() {
    let provider = FakeProvider::desktops(4, 1);
    let mut shell = SpaceShell::new(&provider);

    for id in [4, 2, 2, 3] {
        provider.current.set(id);
        shell.refresh();
        assert_eq!(shell.label(), id.to_string());
    }
}

#[test]
fn refresh_reports_unchanged_label() {
    let mut shell = SpaceShell::new(FakeProvider::desktops(2, 1));
    assert_eq!(shell.refresh(), Refresh::Changed);
    assert_eq!(shell.refresh(), Refresh::Unchanged);
}

#[test]
fn empty_space_list_keeps_previous_label() {
    let provider = FakeProvider::desktops(3, 2);
    let mut shell = SpaceShell::new(&provider);
    shell.refresh();

    provider.spaces.borrow_mut().clear();
    assert_eq!(shell.refresh(), Refresh::Kept(SpaceError::EmptySpaceList));
    assert_eq!(shell.label(), "2");
    assert_eq!(shell.snapshot().map(|s| s.spaces().len()), Some(3));
}

#[test]
fn unavailable_api_keeps_placeholder() {
    let provider = FakeProvider::desktops(3, 2);
    provider.fail_with(SpaceError::Unavailable("CGSCopyManagedDisplaySpaces"));
    let mut shell = SpaceShell::new(&provider);

    assert!(matches!(shell.refresh(), Refresh::Kept(SpaceError::Unavailable(_))));
    assert_eq!(shell.label(), PLACEHOLDER_LABEL);

    provider.recover();
    assert_eq!(shell.refresh(), Refresh::Changed);
    assert_eq!(shell.label(), "2");
}

#[test]
fn switching_to_active_space_is_a_no_op() {
    let mut shell = SpaceShell::new(FakeProvider::desktops(3, 2));
    shell.refresh();

    assert_eq!(shell.switch_to(2), Ok(()));
    assert!(shell.provider().switched.borrow().is_empty());
}

#[test]
fn switching_to_unknown_ordinal_fails() {
    let mut shell = SpaceShell::new(FakeProvider::desktops(3, 1));
    shell.refresh();

    assert_eq!(shell.switch_to(0), Err(SpaceError::UnknownSpace(0)));
    assert_eq!(shell.switch_to(4), Err(SpaceError::UnknownSpace(4)));
    assert!(shell.provider().switched.borrow().is_empty());
}

#[test]
fn switching_to_fullscreen_space_fails() {
    let kinds = [SPACE_TYPE_DESKTOP, SPACE_TYPE_FULLSCREEN, SPACE_TYPE_DESKTOP];
    let mut shell = SpaceShell::new(FakeProvider::with_kinds(&kinds, 1));
    shell.refresh();

    assert_eq!(shell.switch_to(2), Err(SpaceError::NotSwitchable(2)));
    assert_eq!(shell.switch_to(3), Ok(()));
    assert_eq!(*shell.provider().switched.borrow(), vec![3]);
}

#[test]
fn label_and_switch_agree_after_fullscreen_space() {
    let kinds = [SPACE_TYPE_DESKTOP, SPACE_TYPE_FULLSCREEN, SPACE_TYPE_DESKTOP];
    let mut shell = SpaceShell::new(FakeProvider::with_kinds(&kinds, 1));
    shell.refresh();

    let last = shell.menu_entries().pop().unwrap();
    assert_eq!(last.title, "Desktop 2");

    shell.switch_to(last.ordinal).unwrap();
    let target = shell.snapshot().and_then(|s| s.by_ordinal(last.ordinal)).cloned();
    assert_eq!(target.and_then(|t| t.desktop_number), Some(2));

    shell.refresh();
    assert_eq!(shell.label(), "2");
}

#[test]
fn switch_before_first_refresh_queries_first() {
    let mut shell = SpaceShell::new(FakeProvider::desktops(3, 1));
    assert_eq!(shell.switch_to(2), Ok(()));
    assert_eq!(*shell.provider().switched.borrow(), vec![2]);
}

#[test]
fn switch_without_any_snapshot_fails() {
    let provider = FakeProvider::desktops(3, 1);
    provider.fail_with(SpaceError::NullResult("CGSCopyManagedDisplaySpaces"));
    let mut shell = SpaceShell::new(&provider);
    assert_eq!(shell.switch_to(2), Err(SpaceError::NoActiveSpace));
}

#[test]
fn menu_entries_mark_active_and_disable_fullscreen() {
    let kinds = [SPACE_TYPE_DESKTOP, SPACE_TYPE_DESKTOP, SPACE_TYPE_FULLSCREEN];
    let mut shell = SpaceShell::new(FakeProvider::with_kinds(&kinds, 2));
    shell.refresh();

    let entries = shell.menu_entries();
    let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Desktop 1", "Desktop 2", "Fullscreen"]);

    let active: Vec<_> = entries.iter().map(|e| e.active).collect();
    assert_eq!(active, vec![false, true, false]);

    let enabled: Vec<_> = entries.iter().map(|e| e.enabled).collect();
    assert_eq!(enabled, vec![true, true, false]);
}

#[test]
fn active_space_comes_from_snapshot() {
    let provider = FakeProvider::desktops(3, 3);
    assert_eq!(provider.active_space().map(|s| s.ordinal), Ok(3));
}
