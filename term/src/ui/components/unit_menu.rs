//! Drop down listing the selectable units.

use itertools::Itertools;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Block, BorderType, Clear, List, ListItem, ListState, StatefulWidget,
        Widget,
    },
};
use shoplist_lib::item::Unit;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Number of rows the expanded menu occupies, borders included.
pub const UNIT_MENU_HEIGHT: u16 = 5;

pub struct UnitMenu {
    cursor: usize,
}

impl UnitMenu {
    pub fn new(cursor: usize) -> Self {
        Self { cursor }
    }
}

impl CustomWidget for UnitMenu {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let items = Unit::choices()
            .iter()
            .map(|u| {
                ListItem::new(Line::from(format!(" {}", u.menu_label())))
            })
            .collect_vec();

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Plain)
                    .border_style(
                        Style::new().fg(ctx.state.colors.border_color),
                    ),
            )
            .style(
                Style::default()
                    .fg(ctx.state.colors.text)
                    .bg(ctx.state.colors.buffer_bg),
            )
            .highlight_style(
                Style::default()
                    .fg(ctx.state.colors.selected_row_fg)
                    .add_modifier(Modifier::REVERSED),
            );

        let mut list_state =
            ListState::default().with_selected(Some(self.cursor));

        Clear.render(area, buf);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
#[path = "./unit_menu_tests.rs"]
mod tests;
