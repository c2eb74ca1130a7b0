//! Foreign function interfaces used by the macOS front end.

pub mod accessibility;
pub mod bridge;
pub mod skylight;
pub mod symbolic;

pub use skylight::SkyLight;
pub use symbolic::{EventPoster, SystemHotKeys};
