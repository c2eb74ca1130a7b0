//! AppKit user interface: status item, space menu and the controller object
//! that receives their actions.

pub mod controller;
pub mod icon;
pub mod menu;
pub mod status_item;

pub use controller::{create_controller, schedule_timer};
pub use icon::render_label;
pub use menu::build_menu;
pub use status_item::{pop_up_menu, StatusItem};
