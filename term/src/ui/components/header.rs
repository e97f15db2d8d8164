//! Header component for the app title and list summary.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bold title with a right aligned summary.
pub struct Header {
    title: String,
    summary: Option<String>,
}

impl Header {
    /// Creates a new header with the given title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            summary: None,
        }
    }

    pub fn summary<S: Into<String>>(mut self, summary: S) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl CustomWidget for Header {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let header_style = Style::default()
            .fg(ctx.state.colors.label)
            .add_modifier(Modifier::BOLD);

        let summary = self.summary.unwrap_or_default();

        let [title_area, summary_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(summary.width() as u16),
        ])
        .areas(area);

        Paragraph::new(Line::from(self.title.as_str()))
            .style(header_style)
            .render(title_area, buf);

        Paragraph::new(Line::from(summary))
            .style(Style::default().fg(ctx.state.colors.gray))
            .render(summary_area, buf);
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
