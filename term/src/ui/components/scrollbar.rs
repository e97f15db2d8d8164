//! Scrollbar shown alongside the item list.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// Vertical scrollbar drawn on the right edge of `area`. Nothing is drawn
/// when the content fits in the viewport.
pub struct ScrollBar {
    content_length: usize,
}

impl ScrollBar {
    pub fn new(content_length: usize) -> Self {
        Self { content_length }
    }
}

impl CustomStatefulWidget for ScrollBar {
    type State = ScrollbarState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) {
        if area.width < 1
            || area.height < 1
            || self.content_length <= area.height as usize
        {
            return;
        }

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::new().fg(ctx.state.colors.scroll_bar_fg));

        scrollbar.render(area, buf, state)
    }
}

#[cfg(test)]
#[path = "./scrollbar_tests.rs"]
mod tests;
