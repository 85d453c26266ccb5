//! Build profile the logger was configured for

use serde::{Deserialize, Serialize};

/// Controls whether debug events are shown without being forced.
///
/// In [`BuildMode::Debug`] debug events are always dispatched. In
/// [`BuildMode::Release`] they are dropped unless
/// [`Logger::force_debug`](crate::Logger::force_debug) has been enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Mode of the crate being compiled, from `debug_assertions`
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }

    #[inline]
    pub const fn is_debug(self) -> bool {
        matches!(self, BuildMode::Debug)
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}
