//! Deciding whether to offer moving the app bundle into Applications.
//!
//! Only the path logic lives here; the alert and the file moves are in
//! `platform::macos::app::relocate`.

use std::path::{Path, PathBuf};

use crate::model::constants::APPLICATIONS_DIR;

/// Outcome of inspecting where the running bundle lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relocation {
    /// Already inside `/Applications` or `~/Applications`.
    AlreadyInstalled,
    /// Not running from an `.app` bundle, e.g. `cargo run`.
    NotABundle,
    /// Running from elsewhere; offer a move to `destination`.
    Offer { destination: PathBuf },
}

/// Decide what to do with the bundle at `bundle`.
///
/// `home` is the user's home directory, used for `~/Applications`.
pub fn plan(bundle: &Path, home: Option<&Path>) -> Relocation {
    if bundle.extension().is_none_or(|ext| ext != "app") {
        return Relocation::NotABundle;
    }
    let Some(name) = bundle.file_name() else {
        return Relocation::NotABundle;
    };

    let system = Path::new(APPLICATIONS_DIR);
    let user = home.map(|h| h.join("Applications"));
    let installed = bundle.starts_with(system)
        || user.as_deref().is_some_and(|dir| bundle.starts_with(dir));
    if installed {
        return Relocation::AlreadyInstalled;
    }

    Relocation::Offer {
        destination: system.join(name),
    }
}

/// Shell command that waits for `pid` to exit and then opens `bundle`.
pub fn relaunch_script(pid: u32, bundle: &Path) -> String {
    let quoted = bundle.display().to_string().replace('\'', r"'\''");
    format!("while kill -0 {pid} 2>/dev/null; do sleep 0.1; done; open '{quoted}'")
}
