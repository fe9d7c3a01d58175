use std::iter;

use blockfall_engine::BoardStats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Score, counters and the sweep histogram, one entry per line.
pub(crate) struct StatsDisplay<'a> {
    stats: &'a BoardStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub(crate) fn new(stats: &'a BoardStats) -> Self {
        Self { stats, block: None }
    }

    /// Draws the panel inside `block`.
    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Outer size: a fixed-width column with one line per row, block included.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn size(&self) -> Size {
        super::framed_size(self.block.as_ref(), Size::new(CONTENT_WIDTH, ROWS.len() as u16))
    }
}

const CONTENT_WIDTH: u16 = 16;

type Value = &'static dyn Fn(&BoardStats) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|stats| stats.score().to_string()),
    Row::Empty,
    Row::LabelValue("LINES:", &|stats| stats.cleared_rows().to_string()),
    Row::LabelValue("PIECES:", &|stats| stats.completed_pieces().to_string()),
    Row::LabelValue("TICKS:", &|stats| stats.ticks().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|stats| stats.sweep_counter()[1].to_string()),
    Row::LabelValue("DOUBLES:", &|stats| stats.sweep_counter()[2].to_string()),
    Row::LabelValue("TRIPLES:", &|stats| stats.sweep_counter()[3].to_string()),
    Row::LabelValue("FOURS:", &|stats| stats.sweep_counter()[4].to_string()),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let row_areas = Layout::vertical(ROWS.iter().map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), row_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Length(6),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.stats), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
