use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::types::{DraftState, Theme};

/// Bottom line: transient message on the left, export hint, count and date on the right.
pub struct StatusBar<'a> {
    state: DraftState,
    theme: &'a Theme,
    message: &'a str,
    char_count: &'a str,
    date: &'a str,
    export_key: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: DraftState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            message: "",
            char_count: "",
            date: "",
            export_key: "^E",
        }
    }

    pub fn message(mut self, message: &'a str) -> Self {
        self.message = message;
        self
    }

    pub fn char_count(mut self, label: &'a str) -> Self {
        self.char_count = label;
        self
    }

    pub fn date(mut self, date: &'a str) -> Self {
        self.date = date;
        self
    }

    pub fn export_key(mut self, key: &'a str) -> Self {
        self.export_key = key;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let muted = Style::default().fg(self.theme.muted_color());

        let mut right: Vec<Span> = Vec::new();
        if self.state.can_export() {
            right.push(Span::styled(
                self.export_key.to_string(),
                Style::default()
                    .fg(self.theme.accent_color())
                    .add_modifier(Modifier::BOLD),
            ));
            right.push(Span::styled(" Export  ", muted));
        }
        right.push(Span::styled(format!("{}  {} ", self.char_count, self.date), muted));

        let right_width: usize = right.iter().map(|s| s.content.width()).sum();
        let left = format!(" {}", self.message);
        let gap = (area.width as usize).saturating_sub(left.width() + right_width);

        let mut spans = vec![
            Span::styled(left, Style::default().fg(self.theme.fg_color())),
            Span::raw(" ".repeat(gap)),
        ];
        spans.extend(right);

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.panel_color()))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(bar: StatusBar) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_export_hint_hidden_when_empty() {
        let theme = Theme::void_light();
        let row = render(
            StatusBar::new(DraftState::Empty, &theme)
                .char_count("0 characters")
                .date("Jan 5"),
        );
        assert!(!row.contains("Export"));
        assert!(row.contains("0 characters  Jan 5"));
    }

    #[test]
    fn test_export_hint_shown_with_content() {
        let theme = Theme::void_light();
        let row = render(
            StatusBar::new(DraftState::HasContent, &theme)
                .char_count("8 characters")
                .date("Jan 5")
                .message("Saved"),
        );
        assert!(row.contains("^E Export"));
        assert!(row.contains("8 characters"));
        assert!(row.starts_with(" Saved"));
    }
}
