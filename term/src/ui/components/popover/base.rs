//! Bordered container centered over the application area.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

pub struct Popover<'a> {
    content: &'a dyn CustomWidgetRef,
    title: Option<String>,
    border_color: Option<Color>,
    width: Option<u16>,
    height: Option<u16>,
}

impl<'a> Popover<'a> {
    pub fn new(content: &'a dyn CustomWidgetRef) -> Self {
        Self {
            content,
            title: None,
            border_color: None,
            width: None,
            height: None,
        }
    }

    /// Calculates a centered popover area within the given parent area.
    pub fn get_popover_area(area: Rect, width: u16, height: u16) -> Rect {
        let vertical =
            Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
        let horizontal =
            Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixed width in cells, including borders
    pub fn width(mut self, w: u16) -> Self {
        self.width = Some(w);
        self
    }

    /// Fixed height in cells, including borders
    pub fn height(mut self, h: u16) -> Self {
        self.height = Some(h);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

impl<'a> CustomWidgetRef for Popover<'a> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let pop_area = Self::get_popover_area(
            area,
            self.width.unwrap_or(area.width / 2),
            self.height.unwrap_or(area.height / 2),
        );

        let border_color =
            self.border_color.unwrap_or(ctx.state.colors.border_color);

        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(
                Style::new().fg(border_color).bg(ctx.state.colors.buffer_bg),
            )
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(ctx.state.colors.buffer_bg));

        if let Some(title) = self.title.as_ref() {
            block = block.title(format!(" {title} "));
        }

        let inner_area = block.inner(pop_area);

        Clear.render(pop_area, buf);
        block.render(pop_area, buf);
        self.content.render_ref(inner_area, buf, ctx)
    }
}

#[cfg(test)]
#[path = "./base_tests.rs"]
mod tests;
