//! Error type for everything that talks to the window server.
//!
//! There is really only one failure class here: a private API that is missing
//! or answers with something we did not expect. The variants exist so logs
//! say *which* call misbehaved.

/// Failure while querying or driving spaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// The SkyLight framework or one of its symbols could not be resolved.
    #[error("private API unavailable: {0}")]
    Unavailable(&'static str),

    /// A private call returned null or a value of the wrong shape.
    #[error("{0} returned no usable data")]
    NullResult(&'static str),

    #[error("window server reported no spaces")]
    EmptySpaceList,

    #[error("no active space could be determined")]
    NoActiveSpace,

    #[error("no space with ordinal {0}")]
    UnknownSpace(usize),

    /// Fullscreen spaces have no "Switch to Desktop" hotkey.
    #[error("space {0} cannot be switched to")]
    NotSwitchable(usize),

    #[error("desktop {0} has no symbolic hotkey")]
    HotKeyOutOfRange(usize),

    #[error("symbolic hotkey {0} has no key assigned")]
    HotKeyUnbound(i32),

    /// Non-zero CGError from a symbolic hotkey call.
    #[error("symbolic hotkey call failed with CGError {0}")]
    HotKey(i32),

    #[error("could not post keyboard event")]
    EventPost,

    #[error("accessibility access has not been granted")]
    NotTrusted,

    /// A file operation while moving the app bundle failed.
    #[error("could not move app bundle: {0}")]
    Relocate(String),
}

pub type Result<T> = std::result::Result<T, SpaceError>;
