//! Stream trait for log output destinations

use super::{error::Result, event::Event, log_level::LevelMask, log_level::LogLevel};
use std::sync::atomic::{AtomicU8, Ordering};

/// Levels a stream currently reacts to.
///
/// Stored atomically so a stream shared through an `Arc` can be
/// reconfigured while other threads dispatch to it.
#[derive(Debug)]
pub struct LevelFilter {
    mask: AtomicU8,
}

impl LevelFilter {
    pub const fn new(mask: LevelMask) -> Self {
        Self {
            mask: AtomicU8::new(mask.bits()),
        }
    }

    #[inline]
    pub fn mask(&self) -> LevelMask {
        LevelMask::from_bits_truncate(self.mask.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, mask: LevelMask) {
        self.mask.store(mask.bits(), Ordering::Release);
    }

    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.mask().contains(level)
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::new(LevelMask::ALL)
    }
}

/// A named destination that receives events.
///
/// Implementors supply the side effect in [`Stream::handle`]; the level check
/// lives in [`StreamExt::notify`] and is applied before `handle` is reached.
/// Streams are shared between threads, so any mutable state must be guarded
/// internally.
pub trait Stream: Send + Sync {
    fn levels(&self) -> &LevelFilter;
    fn handle(&self, event: &Event) -> Result<()>;
    fn name(&self) -> &str;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Filtering operations shared by every [`Stream`].
///
/// Blanket implemented, so no stream can replace the level check.
pub trait StreamExt {
    /// Replace the set of levels this stream reacts to
    fn set_levels(&self, mask: impl Into<LevelMask>);
    fn level_mask(&self) -> LevelMask;
    fn accepts(&self, level: LogLevel) -> bool;

    /// Offer an event to the stream.
    ///
    /// Returns `Ok(true)` when the stream handled it, `Ok(false)` when its
    /// mask filtered it out.
    fn notify(&self, event: &Event) -> Result<bool>;
}

impl<S: Stream + ?Sized> StreamExt for S {
    fn set_levels(&self, mask: impl Into<LevelMask>) {
        self.levels().set(mask.into());
    }

    fn level_mask(&self) -> LevelMask {
        self.levels().mask()
    }

    fn accepts(&self, level: LogLevel) -> bool {
        self.levels().accepts(level)
    }

    fn notify(&self, event: &Event) -> Result<bool> {
        if !self.accepts(event.level) {
            return Ok(false);
        }
        self.handle(event)?;
        Ok(true)
    }
}
