//! Footer listing the key hints for the active view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

const HINT_SEPARATOR: &str = " · ";

/// Single "(key) description" pair from a legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyHint<'a> {
    key: &'a str,
    description: &'a str,
}

impl<'a> KeyHint<'a> {
    fn parse(hint: &'a str) -> Self {
        let hint = hint.trim();
        match hint.find(')') {
            Some(end) if hint.starts_with('(') => Self {
                key: &hint[..=end],
                description: hint[end + 1..].trim_start(),
            },
            _ => Self {
                key: "",
                description: hint,
            },
        }
    }

    fn width(&self) -> usize {
        match (self.key.is_empty(), self.description.is_empty()) {
            (true, _) => self.description.width(),
            (false, true) => self.key.width(),
            (false, false) => self.key.width() + 1 + self.description.width(),
        }
    }
}

/// Renders a comma separated legend such as `"(a) add, (q) quit"` as styled
/// key hints. Hints that do not fit are dropped from the end.
pub struct InfoFooter<'a> {
    hints: Vec<KeyHint<'a>>,
}

impl<'a> InfoFooter<'a> {
    pub fn new(legend: &'a str) -> Self {
        let hints = legend
            .split(", ")
            .filter(|h| !h.trim().is_empty())
            .map(KeyHint::parse)
            .collect();
        Self { hints }
    }

    /// Number of leading hints that fit in `width` columns
    fn fitting_hints(&self, width: usize) -> usize {
        let mut used = 0;

        for (i, hint) in self.hints.iter().enumerate() {
            let sep = if i == 0 { 0 } else { HINT_SEPARATOR.width() };
            if used + sep + hint.width() > width {
                return i;
            }
            used += sep + hint.width();
        }

        self.hints.len()
    }

    fn line(&self, count: usize, ctx: &CustomWidgetContext) -> Line<'a> {
        let colors = &ctx.state.colors;
        let key_style =
            Style::new().fg(colors.label).add_modifier(Modifier::BOLD);
        let desc_style = Style::new().fg(colors.text);
        let sep_style = Style::new().fg(colors.gray);

        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().take(count).enumerate() {
            if i > 0 {
                spans.push(Span::styled(HINT_SEPARATOR, sep_style));
            }
            if !hint.key.is_empty() {
                spans.push(Span::styled(hint.key, key_style));
                if !hint.description.is_empty() {
                    spans.push(Span::raw(" "));
                }
            }
            spans.push(Span::styled(hint.description, desc_style));
        }

        Line::from(spans)
    }
}

impl<'a> CustomWidget for InfoFooter<'a> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(ctx.state.colors.border_color));

        let count = self.fitting_hints(block.inner(area).width as usize);

        Paragraph::new(self.line(count, ctx))
            .style(Style::new().bg(ctx.state.colors.buffer_bg))
            .centered()
            .block(block)
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
