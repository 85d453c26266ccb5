//! Stream implementations

pub mod archive;
pub mod console;
pub mod file;

pub use archive::ArchiveStream;
pub use console::ConsoleStream;
pub use file::{FileStream, DEFAULT_LOG_FILE};

pub use crate::core::{Stream, StreamExt};
