//! Render a projected timeline for the terminal.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use hiring_timeline::json::JSON;
use hiring_timeline::pipeline::Timeline;

const HEADER: [&str; 3] = ["Activity", "Period", "Business Days"];

/// Three column table: activity label, period label and business days label.
pub fn render_table(timeline: &Timeline) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADER.to_vec());
    for stage in timeline {
        table.add_row(vec![
            Cell::new(stage.name.label()),
            Cell::new(stage.period_label()),
            Cell::new(stage.bus_days_label()).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub fn render_json(timeline: &Timeline) -> Result<String> {
    timeline
        .to_json_pretty()
        .context("failed to serialize timeline")
}
