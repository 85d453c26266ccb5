//! Console stream implementation

use crate::core::{Event, LevelFilter, Result, Stream};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Writes rendered events to standard output.
///
/// Output is the bare rendered text. Colours and a trailing newline are
/// opt-in so the default output stays identical to [`Event::render`].
pub struct ConsoleStream {
    levels: LevelFilter,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    newline: bool,
}

impl ConsoleStream {
    pub fn new() -> Self {
        Self {
            levels: LevelFilter::default(),
            use_colors: false,
            newline: false,
        }
    }

    /// Colour each event by level. Ignored without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Terminate every event with `\n`
    #[must_use]
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    fn format(&self, event: &Event) -> String {
        let text = event.render();

        #[cfg(feature = "console")]
        let text = if self.use_colors {
            text.color(event.level.color_code()).to_string()
        } else {
            text
        };

        if self.newline {
            text + "\n"
        } else {
            text
        }
    }
}

impl Default for ConsoleStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for ConsoleStream {
    fn levels(&self) -> &LevelFilter {
        &self.levels
    }

    fn handle(&self, event: &Event) -> Result<()> {
        let output = self.format(event);
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
