//! Read-only rendering of a single shopping item.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};
use shoplist_lib::item::ShoppingItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::traits::{CustomWidget, CustomWidgetContext};

/// Height of an item row, borders included.
pub const ROW_HEIGHT: u16 = 3;
/// Used for overflow when a name exceeds its column
const ELLIPSIS: &str = "…";
const ROW_ACTIONS: &str = "(e) edit  (d) delete";
const QUANTITY_WIDTH: u16 = 14;

pub struct RowView<'a> {
    item: &'a ShoppingItem,
    selected: bool,
}

impl<'a> RowView<'a> {
    pub fn new(item: &'a ShoppingItem) -> Self {
        Self {
            item,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> CustomWidget for RowView<'a> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;

        let border_color = if self.selected {
            colors.selected_row_fg
        } else {
            colors.border_color
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border_color))
            .style(Style::new().bg(colors.row_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        let actions_width = if self.selected {
            ROW_ACTIONS.width() as u16
        } else {
            0
        };

        let [name_area, qty_area, actions_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(QUANTITY_WIDTH),
            Constraint::Length(actions_width),
        ])
        .spacing(1)
        .areas(inner);

        let mut name_style = Style::new().fg(colors.text);
        if self.selected {
            name_style = name_style
                .fg(colors.selected_row_fg)
                .add_modifier(Modifier::BOLD);
        }

        Paragraph::new(fit_to_width(&self.item.name, name_area.width))
            .style(name_style)
            .render(name_area, buf);

        Paragraph::new(format!("Qty: {}", self.item.quantity_label()))
            .style(Style::new().fg(colors.label))
            .render(qty_area, buf);

        if self.selected {
            Line::from(ROW_ACTIONS)
                .style(Style::new().fg(colors.gray))
                .right_aligned()
                .render(actions_area, buf);
        }
    }
}

/// Truncates `content` to `max_width` display columns, marking the cut with
/// an ellipsis.
pub fn fit_to_width(content: &str, max_width: u16) -> String {
    let max_width = max_width as usize;

    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut value = String::new();

    for c in content.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        value.push(c);
    }

    let mut value = value.trim_end().to_string();
    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./row_tests.rs"]
mod tests;
