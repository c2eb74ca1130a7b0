//! Event handling for the macOS front end.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
