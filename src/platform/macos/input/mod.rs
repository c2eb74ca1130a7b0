//! Input from the system: notification observers.

pub mod observers;

pub use observers::{
    install_termination_observer, subscribe_all, Center, NotificationSubscription,
};
