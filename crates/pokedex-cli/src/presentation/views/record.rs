use std::fmt;

use pokedex_types::DisplayRecord;

use crate::presentation::formatters::{bold, format_height_metric, format_weight_metric, paint};
use crate::presentation::view_models::ConsoleOptions;

/// One-shot console rendering of a record.
pub struct RecordView<'a> {
    record: &'a DisplayRecord,
    options: ConsoleOptions,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a DisplayRecord, options: ConsoleOptions) -> Self {
        Self { record, options }
    }

    fn label(&self, text: &str) -> String {
        bold(text, self.options.enable_color)
    }

    fn push_identity(&self, lines: &mut Vec<String>) {
        let record = self.record;
        lines.push(format!("{} {}", self.label("Name:"), record.name));
        lines.push(format!(
            "{} #{}",
            self.label("National Pokédex Number:"),
            record.id_badge
        ));

        let types = record
            .types
            .iter()
            .map(|badge| paint(&badge.name, badge.color, self.options.enable_color))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{} {}", self.label("Type(s):"), types));
    }

    fn push_stats(&self, lines: &mut Vec<String>) {
        lines.push(self.label("Base Stats:"));
        for stat in &self.record.stats {
            lines.push(format!("  {}: {}", stat.label, stat.value));
        }
    }

    fn push_abilities(&self, lines: &mut Vec<String>) {
        let abilities = &self.record.abilities;
        lines.push(self.label("Abilities:"));
        for (index, name) in abilities.regular.iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, name));
        }
        if !abilities.hidden.is_empty() {
            lines.push(format!("  Hidden Ability: {}", abilities.hidden.join(", ")));
        }
    }

    fn push_size(&self, lines: &mut Vec<String>) {
        lines.push(self.label("Size:"));
        lines.push(format!(
            "  Height: {}",
            format_height_metric(&self.record.height)
        ));
        lines.push(format!(
            "  Weight: {}",
            format_weight_metric(&self.record.weight)
        ));
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(16);
        self.push_identity(&mut lines);
        self.push_stats(&mut lines);
        if self.options.show_abilities {
            self.push_abilities(&mut lines);
        }
        if self.options.show_size {
            self.push_size(&mut lines);
        }
        lines
    }
}

impl fmt::Display for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn render_lines(record: &DisplayRecord, options: &ConsoleOptions) -> Vec<String> {
    RecordView::new(record, *options).lines()
}
