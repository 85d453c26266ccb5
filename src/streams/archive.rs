//! In-memory archive stream

use crate::core::{Event, LevelFilter, Result, Stream};
use parking_lot::Mutex;

/// Keeps a copy of every event it handles, in arrival order.
///
/// Useful in tests and for programs that want to inspect or replay history.
///
/// ```
/// use boom_log::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::new(BuildMode::Release);
/// let archive = Arc::new(ArchiveStream::new());
/// logger.add_stream("history", archive.clone());
///
/// logger.info("first", "", "");
/// logger.error("second", "db", "E17");
///
/// let messages: Vec<String> = archive.events().into_iter().map(|e| e.message).collect();
/// assert_eq!(messages, ["first", "second"]);
/// ```
#[derive(Default)]
pub struct ArchiveStream {
    levels: LevelFilter,
    events: Mutex<Vec<Event>>,
}

impl ArchiveStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything captured so far
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<Event> {
        self.events.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Run `f` over a snapshot of the captured events.
    ///
    /// The lock is released before `f` runs, so `f` may log through a logger
    /// this archive is registered with. Events captured meanwhile are not
    /// part of the snapshot.
    pub fn with_events<R>(&self, f: impl FnOnce(&[Event]) -> R) -> R {
        let snapshot = self.events();
        f(&snapshot)
    }
}

impl Stream for ArchiveStream {
    fn levels(&self) -> &LevelFilter {
        &self.levels
    }

    fn handle(&self, event: &Event) -> Result<()> {
        self.events.lock().push(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "archive"
    }
}
