//! Tests for desktop switching through symbolic hotkeys, using an
//! in-memory hotkey table and key poster.

use std::cell::RefCell;
use std::collections::HashMap;

use whichspace::hotkeys::{
    ensure_enabled, switch_to_desktop, HotKeyTable, KeyBinding, KeyPoster, SymbolicHotKey,
    TrustPrompt,
};
use whichspace::model::UNBOUND_VIRTUAL_KEY;
use whichspace::{Result, SpaceError};

/// Control (0x40000) plus the digit row.
fn control_digit(desktop: usize) -> KeyBinding {
    KeyBinding {
        key_equivalent: b'0' as u16 + desktop as u16,
        virtual_key: 17 + desktop as u16,
        modifiers: 0x40000,
    }
}

#[derive(Default)]
struct FakeTable {
    bindings: HashMap<i32, KeyBinding>,
    enabled: RefCell<HashMap<i32, bool>>,
    set_calls: RefCell<usize>,
}

impl FakeTable {
    fn with_desktops(count: usize, enabled: bool) -> Self {
        let mut table = Self::default();
        for desktop in 1..=count {
            let key = SymbolicHotKey::for_desktop(desktop).unwrap();
            table.bindings.insert(key.0, control_digit(desktop));
            table.enabled.borrow_mut().insert(key.0, enabled);
        }
        table
    }
}

impl HotKeyTable for FakeTable {
    fn binding(&self, key: SymbolicHotKey) -> Result<KeyBinding> {
        self.bindings.get(&key.0).copied().ok_or(SpaceError::HotKey(-1))
    }

    fn is_enabled(&self, key: SymbolicHotKey) -> bool {
        self.enabled.borrow().get(&key.0).copied().unwrap_or(false)
    }

    fn set_enabled(&self, key: SymbolicHotKey, enabled: bool) -> Result<()> {
        *self.set_calls.borrow_mut() += 1;
        self.enabled.borrow_mut().insert(key.0, enabled);
        Ok(())
    }
}

#[derive(Default)]
struct FakePoster {
    posted: RefCell<Vec<KeyBinding>>,
}

impl KeyPoster for FakePoster {
    fn post(&self, binding: &KeyBinding) -> Result<()> {
        self.posted.borrow_mut().push(*binding);
        Ok(())
    }
}

#[test]
fn enabling_disabled_hotkey_twice_is_idempotent() {
    let table = FakeTable::with_desktops(3, false);
    let key = SymbolicHotKey::for_desktop(2).unwrap();

    assert_eq!(ensure_enabled(&table, key), Ok(true));
    assert_eq!(ensure_enabled(&table, key), Ok(false));
    assert!(table.is_enabled(key));
    assert_eq!(*table.set_calls.borrow(), 1);
}

#[test]
fn switch_posts_binding_once() {
    let table = FakeTable::with_desktops(3, true);
    let poster = FakePoster::default();

    switch_to_desktop(&table, &poster, 3).unwrap();

    assert_eq!(*poster.posted.borrow(), vec![control_digit(3)]);
    assert_eq!(*table.set_calls.borrow(), 0);
}

#[test]
fn switch_enables_disabled_hotkey_first() {
    let table = FakeTable::with_desktops(2, false);
    let poster = FakePoster::default();

    switch_to_desktop(&table, &poster, 2).unwrap();

    assert!(table.is_enabled(SymbolicHotKey(119)));
    assert_eq!(poster.posted.borrow().len(), 1);
}

#[test]
fn switch_refuses_unbound_hotkey() {
    let mut table = FakeTable::with_desktops(2, true);
    let key = SymbolicHotKey::for_desktop(2).unwrap();
    table.bindings.insert(
        key.0,
        KeyBinding {
            key_equivalent: 0xFFFF,
            virtual_key: UNBOUND_VIRTUAL_KEY,
            modifiers: 0,
        },
    );
    let poster = FakePoster::default();

    assert_eq!(
        switch_to_desktop(&table, &poster, 2),
        Err(SpaceError::HotKeyUnbound(119))
    );
    assert!(poster.posted.borrow().is_empty());
}

#[test]
fn switch_out_of_range_touches_nothing() {
    let table = FakeTable::with_desktops(16, false);
    let poster = FakePoster::default();

    assert_eq!(
        switch_to_desktop(&table, &poster, 17),
        Err(SpaceError::HotKeyOutOfRange(17))
    );
    assert_eq!(*table.set_calls.borrow(), 0);
    assert!(poster.posted.borrow().is_empty());
}

#[test]
fn binding_lookup_errors_propagate() {
    let table = FakeTable::default();
    let poster = FakePoster::default();
    assert_eq!(
        switch_to_desktop(&table, &poster, 1),
        Err(SpaceError::HotKey(-1))
    );
}

#[test]
fn trust_prompt_is_shown_only_on_first_check() {
    let trust = TrustPrompt::new();
    let mut prompts = Vec::new();
    for _ in 0..3 {
        let got = trust.check(|prompt| {
            prompts.push(prompt);
            false
        });
        assert_eq!(got, Err(SpaceError::NotTrusted));
    }
    assert_eq!(prompts, vec![true, false, false]);
}

#[test]
fn trust_prompt_passes_once_granted() {
    let trust = TrustPrompt::new();
    assert_eq!(trust.check(|_| false), Err(SpaceError::NotTrusted));
    let mut asked = None;
    assert_eq!(
        trust.check(|prompt| {
            asked = Some(prompt);
            true
        }),
        Ok(())
    );
    assert_eq!(asked, Some(false));
}
