//! Application state shared by the AppKit callbacks.

pub mod relocate;
pub mod state;

pub use relocate::offer_move_to_applications;
pub use state::{install_state, shutdown, with_state, AppState};
