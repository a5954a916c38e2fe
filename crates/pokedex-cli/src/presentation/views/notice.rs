use std::fmt;

use crate::presentation::formatters::{bold, dim};
use crate::presentation::view_models::{Notice, NoticeLevel};

/// Printed under the warning when the console command gets no selector.
pub const USAGE_GUIDANCE: &str = "\
Usage: pokedex <NAME_OR_ID> [--abilities] [--size]
       pokedex --number <ID>
       pokedex --random
Example: pokedex pikachu";

/// Console rendering of a notice, written to stderr by the handler.
pub struct NoticeView<'a> {
    notice: &'a Notice,
    enable_color: bool,
    usage: bool,
}

impl<'a> NoticeView<'a> {
    pub fn new(notice: &'a Notice, enable_color: bool) -> Self {
        Self {
            notice,
            enable_color,
            usage: false,
        }
    }

    pub fn with_usage(mut self) -> Self {
        self.usage = true;
        self
    }
}

impl fmt::Display for NoticeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.notice.level {
            NoticeLevel::Warning => "Warning:",
            NoticeLevel::Error => "Error:",
        };
        writeln!(
            f,
            "{} {}",
            bold(prefix, self.enable_color),
            self.notice.message
        )?;
        if let Some(hint) = &self.notice.hint {
            writeln!(f, "{}", dim(hint, self.enable_color))?;
        }
        if self.usage {
            writeln!(f, "{}", USAGE_GUIDANCE)?;
        }
        Ok(())
    }
}
