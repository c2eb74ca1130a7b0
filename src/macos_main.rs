//! macOS entry point: builds the app state and runs the AppKit loop.

use tracing::{debug, info};

use whichspace::click::ClickTracker;
use whichspace::events::{publish, AppEvent};
use whichspace::model::PLACEHOLDER_LABEL;
use whichspace::platform::macos::bridge::{autoreleasepool, get_class, msg_send, sel, NSApp};
use whichspace::platform::macos::input::{install_termination_observer, subscribe_all};
use whichspace::platform::macos::{
    create_controller, dispatch_events, install_state, load_preferences,
    offer_move_to_applications, schedule_timer, AppState, SkyLightProvider, StatusItem,
};
use whichspace::SpaceShell;

/// NSApplicationActivationPolicyAccessory: no Dock icon, no main menu.
const ACTIVATION_POLICY_ACCESSORY: i64 = 1;

/// Main entry point for macOS.
pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        let _: bool = msg_send![app, setActivationPolicy: ACTIVATION_POLICY_ACCESSORY];
        offer_move_to_applications();

        let prefs = load_preferences();
        let system_interval: f64 = msg_send![get_class("NSEvent"), doubleClickInterval];
        let interval = prefs.effective_double_click_interval(Some(system_interval));
        let clicks = ClickTracker::new(interval, prefs.double_click_action.is_configured());
        debug!(?interval, action = ?prefs.double_click_action, "click handling configured");

        let controller = create_controller();
        let mut status = StatusItem::install(controller, sel!(statusItemPressed:));
        status.set_highlight_mode(prefs.highlight_on_click);
        status.set_label(PLACEHOLDER_LABEL);

        let shell = SpaceShell::new(SkyLightProvider::new());
        let poll_period = prefs.poll_period();
        let mut state = AppState::new(shell, clicks, prefs, status, controller);
        state.add_subscriptions(subscribe_all());
        if let Some(period) = poll_period {
            info!(?period, "polling enabled");
            let timer = schedule_timer(controller, sel!(pollTick:), period.as_secs_f64(), true);
            state.set_poll_timer(timer);
        }
        install_state(state);
        install_termination_observer();

        publish(AppEvent::RefreshRequested);
        dispatch_events();

        let _: () = msg_send![app, run];
    });
}
