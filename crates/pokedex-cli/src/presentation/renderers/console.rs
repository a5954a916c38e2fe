use anyhow::Result;
use pokedex_types::DisplayRecord;

use crate::presentation::view_models::{ConsoleOptions, Notice, OutputFormat};
use crate::presentation::views::{NoticeView, RecordView};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: ConsoleOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: ConsoleOptions) -> Self {
        Self { format, options }
    }

    pub fn render_record(&self, record: &DisplayRecord) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
            OutputFormat::Text => print!("{}", RecordView::new(record, self.options)),
        }
        Ok(())
    }

    /// Notices always go to stderr so stdout stays parseable.
    pub fn render_notice(&self, notice: &Notice, with_usage: bool) {
        let view = NoticeView::new(notice, self.options.enable_color);
        if with_usage {
            eprint!("{}", view.with_usage());
        } else {
            eprint!("{}", view);
        }
    }
}
