//! Root view composing the header, list, footer and popovers.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Padding, Widget},
};
use std::rc::Rc;

use crate::store::{Dispatcher, action::Action, state::State};

use super::{
    components::{
        footer::InfoFooter,
        header::Header,
        popover::{base::Popover, simple::SimplePopover},
    },
    views::{
        add_dialog::AddDialog,
        shopping_list::ShoppingListView,
        traits::{
            CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
            View,
        },
    },
};

pub const APP_TITLE: &str = "Shopping List";
const DEFAULT_PADDING: Padding = Padding::horizontal(1);
const NOTIFICATION_WIDTH: u16 = 40;
const NOTIFICATION_HEIGHT: u16 = 6;

/// Top level view handed to the renderer
pub trait Application: View {}

pub struct App {
    dispatcher: Rc<dyn Dispatcher>,
    list: ShoppingListView,
    add_dialog: AddDialog,
}

impl App {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            list: ShoppingListView::new(Rc::clone(&dispatcher)),
            add_dialog: AddDialog::new(Rc::clone(&dispatcher)),
            dispatcher,
        }
    }

    fn item_summary(state: &State) -> String {
        match state.list.len() {
            1 => String::from("1 item"),
            n => format!("{n} items"),
        }
    }

    fn render_notification(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let Some(notification) = ctx.state.notification.as_ref() else {
            return Ok(());
        };

        let message = SimplePopover::new(notification.message.as_str())
            .footer("(enter) dismiss");

        Popover::new(&message)
            .border_color(ctx.state.colors.error)
            .width(NOTIFICATION_WIDTH.min(area.width))
            .height(NOTIFICATION_HEIGHT.min(area.height))
            .render_ref(area, buf, ctx)
    }

    fn dismiss_notification(&self, evt: &Event, state: &State) -> bool {
        if state.notification.is_none() {
            return false;
        }

        match evt {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Esc) =>
            {
                self.dispatcher.dispatch(Action::DismissNotification);
                true
            }
            _ => false,
        }
    }
}

impl Application for App {}

impl View for App {
    fn legend(&self, state: &State) -> &str {
        if state.list.draft().visible {
            self.add_dialog.legend(state)
        } else {
            self.list.legend(state)
        }
    }
}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        // render background for entire display
        let block = Block::new()
            .style(Style::new().bg(ctx.state.colors.buffer_bg))
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let [header_area, _, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // spacer
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(inner_area);

        Header::new(APP_TITLE)
            .summary(Self::item_summary(ctx.state))
            .render(header_area, buf, ctx);

        self.list.render_ref(list_area, buf, ctx)?;

        InfoFooter::new(self.legend(ctx.state)).render(footer_area, buf, ctx);

        self.add_dialog.render_ref(area, buf, ctx)?;
        self.render_notification(area, buf, ctx)
    }
}

impl EventHandler for App {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if self.dismiss_notification(evt, ctx.state) {
            return true;
        }

        if self.add_dialog.process_event(evt, ctx) {
            return true;
        }

        if self.list.process_event(evt, ctx) {
            return true;
        }

        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('t')
            && !ctx.state.is_capturing_input()
        {
            self.dispatcher.dispatch(Action::CycleTheme);
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
