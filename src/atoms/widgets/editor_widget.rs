use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::wrap_calc;
use crate::types::Theme;

const MIN_COLUMN_WIDTH: u16 = 40;
const TOP_PADDING: u16 = 1;

/// The narrow centred column the text is written into.
pub fn text_column(area: Rect) -> Rect {
    let usable = area.width.saturating_sub(4).max(1);
    let width = (area.width / 3).max(MIN_COLUMN_WIDTH).min(usable);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let top = TOP_PADDING.min(area.height);
    Rect::new(x, area.y + top, width, area.height - top)
}

pub struct EditorWidget<'a> {
    lines: &'a [String],
    placeholder: &'a str,
    theme: &'a Theme,
    scroll_offset: usize,
}

impl<'a> EditorWidget<'a> {
    pub fn new(lines: &'a [String], placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            lines,
            placeholder,
            theme,
            scroll_offset: 0,
        }
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }
}

impl Widget for EditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.bg_color()))
            .render(area, buf);

        let column = text_column(area);

        // The prompt only shows while there is nothing at all in the buffer.
        if self.lines.is_empty() || self.is_empty() {
            let prompt: Vec<Line> = wrap_calc::wrap_line(self.placeholder, column.width)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(prompt)
                .style(
                    Style::default()
                        .fg(self.theme.placeholder_color())
                        .bg(self.theme.bg_color())
                        .add_modifier(Modifier::ITALIC),
                )
                .render(column, buf);
            return;
        }

        // Pre-wrap so the rendered rows agree with wrap_calc's cursor maths.
        // Rows are skipped here rather than through Paragraph::scroll, whose
        // offset is a u16.
        let display_lines: Vec<Line> = self
            .lines
            .iter()
            .flat_map(|line| wrap_calc::wrap_line(line, column.width))
            .skip(self.scroll_offset)
            .take(usize::from(column.height))
            .map(Line::from)
            .collect();

        Paragraph::new(display_lines)
            .style(
                Style::default()
                    .fg(self.theme.fg_color())
                    .bg(self.theme.bg_color()),
            )
            .render(column, buf);
    }
}
