//! Event system for decoupled inter-module communication.
//!
//! Producers (workspace notifications, the poll timer, status item clicks and
//! menu picks) publish [`AppEvent`]s; the platform dispatcher drains them on
//! the main thread and drives the shell.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Observers   │   │ Status item  │   │    Menu      │
//! │ (NSWorkspace)│   │   clicks     │   │   actions    │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        │ publish()        │ publish()        │ publish()
//!        ▼                  ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ take_event()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher, take_event};
pub use types::AppEvent;
