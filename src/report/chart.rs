//! Trend chart embedded in the summary report: grouped vertical bars for
//! the most recent entries, one sub-bar per chart series, on a fixed 0–10 scale.

use super::layout::{DrawOp, Font, PageLayout, Rgb, BLACK, DARK_GRAY, LIGHT_GRAY};
use crate::dates;
use crate::models::{SymptomEntry, CHART_FIELDS};
use crate::trends::{sort_by_date, SortOrder};

const MAX_SEVERITY: f32 = 10.0;
const AXIS_LABEL_WIDTH: f32 = 24.0;
const DATE_LABEL_HEIGHT: f32 = 14.0;
const LEGEND_HEIGHT: f32 = 22.0;
const LEGEND_SWATCH: f32 = 9.0;

/// Bar colours, index-aligned with `CHART_FIELDS`.
pub const SERIES_COLORS: [Rgb; 3] = [
    Rgb::new(0.86, 0.30, 0.30),
    Rgb::new(0.25, 0.50, 0.85),
    Rgb::new(0.30, 0.70, 0.40),
];

/// Total vertical space the chart occupies below the cursor.
pub fn chart_block_height(layout: &PageLayout<'_>) -> f32 {
    layout.config().chart_height + DATE_LABEL_HEIGHT + LEGEND_HEIGHT
}

/// Draws the chart at the cursor (breaking first if it would not fit) and
/// moves the cursor below the legend. `entries` may be in any order.
pub fn trend_chart(layout: &mut PageLayout<'_>, entries: &[SymptomEntry]) {
    layout.ensure_space(chart_block_height(layout));

    let config = layout.config();
    let limit = config.chart_entry_limit;
    let plot_height = config.chart_height;
    let left = config.margin + AXIS_LABEL_WIDTH;
    let plot_width = config.content_width() - AXIS_LABEL_WIDTH;
    let top = layout.cursor();
    let bottom = top + plot_height;

    // Gridlines and y labels at each integer step.
    for step in 0..=10 {
        let y = bottom - plot_height * step as f32 / MAX_SEVERITY;
        let color = if step == 0 { BLACK } else { LIGHT_GRAY };
        layout.draw(DrawOp::Line {
            x1: left,
            y1: y,
            x2: left + plot_width,
            y2: y,
            thickness: 0.5,
            color,
        });
        let x = left - AXIS_LABEL_WIDTH;
        layout.text_at(step.to_string(), x, y + 3.0, 8.0, Font::Regular, DARK_GRAY);
    }
    layout.draw(DrawOp::Line {
        x1: left,
        y1: top,
        x2: left,
        y2: bottom,
        thickness: 0.5,
        color: BLACK,
    });

    // Most recent entries, plotted oldest to newest.
    let mut recent = entries.to_vec();
    sort_by_date(&mut recent, SortOrder::NewestFirst);
    recent.truncate(limit);
    recent.reverse();

    if recent.is_empty() {
        let y = top + plot_height / 2.0;
        layout.text_at("No data", left + plot_width / 2.0 - 15.0, y, 10.0, Font::Regular, DARK_GRAY);
    } else {
        let slot = plot_width / recent.len() as f32;
        let bar_width = slot * 0.8 / CHART_FIELDS.len() as f32;
        for (i, entry) in recent.iter().enumerate() {
            let slot_x = left + slot * i as f32;
            for (s, field) in CHART_FIELDS.iter().enumerate() {
                let value = (entry.severity(*field) as f32).clamp(0.0, MAX_SEVERITY);
                let height = plot_height * value / MAX_SEVERITY;
                if height > 0.0 {
                    layout.draw(DrawOp::Rect {
                        x: slot_x + slot * 0.1 + bar_width * s as f32,
                        y: bottom - height,
                        width: bar_width,
                        height,
                        color: SERIES_COLORS[s],
                    });
                }
            }
            let label = dates::short_date(entry.date);
            layout.text_at(label, slot_x + slot * 0.1, bottom + 10.0, 7.0, Font::Regular, DARK_GRAY);
        }
    }

    // Legend.
    let legend_y = bottom + DATE_LABEL_HEIGHT + 4.0;
    let mut x = left;
    for (s, field) in CHART_FIELDS.iter().enumerate() {
        layout.draw(DrawOp::Rect {
            x,
            y: legend_y,
            width: LEGEND_SWATCH,
            height: LEGEND_SWATCH,
            color: SERIES_COLORS[s],
        });
        layout.text_at(field.label(), x + LEGEND_SWATCH + 4.0, legend_y + 8.0, 9.0, Font::Regular, BLACK);
        x += 100.0;
    }

    layout.set_cursor(top + chart_block_height(layout));
}
