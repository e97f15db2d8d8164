//! Inline editor shown in place of the row being edited.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Widget},
};
use std::{cell::RefCell, rc::Rc};

use crate::{
    store::{Dispatcher, action::Action},
    ui::components::input::{Input, InputState},
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
};

/// "Quantity: " plus room for the value and cursor
const QUANTITY_INPUT_WIDTH: u16 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Quantity,
}

pub struct EditorView {
    dispatcher: Rc<dyn Dispatcher>,
    focus: RefCell<Focus>,
}

impl EditorView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            focus: RefCell::new(Focus::Name),
        }
    }

    fn toggle_focus(&self) {
        let next = match *self.focus.borrow() {
            Focus::Name => Focus::Quantity,
            Focus::Quantity => Focus::Name,
        };
        *self.focus.borrow_mut() = next;
    }

    fn reset_focus(&self) {
        *self.focus.borrow_mut() = Focus::Name;
    }

    fn update_value(
        &self,
        name: &str,
        quantity: &str,
        edit: impl Fn(&mut String),
    ) {
        match *self.focus.borrow() {
            Focus::Name => {
                let mut value = name.to_string();
                edit(&mut value);
                self.dispatcher.dispatch(Action::UpdateEditName(value));
            }
            Focus::Quantity => {
                let mut value = quantity.to_string();
                edit(&mut value);
                self.dispatcher.dispatch(Action::UpdateEditQuantity(value));
            }
        }
    }
}

impl CustomWidgetRef for EditorView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let Some(draft) = ctx.state.list.edit_draft() else {
            return Ok(());
        };

        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::new().fg(ctx.state.colors.input_editing))
            .style(Style::new().bg(ctx.state.colors.row_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, qty_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(QUANTITY_INPUT_WIDTH),
        ])
        .spacing(1)
        .areas(inner);

        let focus = *self.focus.borrow();

        let mut name_state =
            InputState::new(draft.name.as_str(), focus == Focus::Name);
        Input::new("Name").render(name_area, buf, &mut name_state, ctx);

        let mut qty_state =
            InputState::new(draft.quantity.as_str(), focus == Focus::Quantity);
        Input::new("Quantity").render(qty_area, buf, &mut qty_state, ctx);

        Ok(())
    }
}

impl EventHandler for EditorView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let Some(draft) = ctx.state.list.edit_draft() else {
            return false;
        };

        let Event::Key(key) = evt else {
            return false;
        };

        if key.kind != KeyEventKind::Press {
            // releases of keys typed into the editor must not leak out
            return true;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Enter => {
                self.reset_focus();
                self.dispatcher.dispatch(Action::ConfirmEdit);
            }
            KeyCode::Esc => {
                self.reset_focus();
                self.dispatcher.dispatch(Action::CancelEdit);
            }
            KeyCode::Backspace => {
                self.update_value(&draft.name, &draft.quantity, |v| {
                    v.pop();
                });
            }
            KeyCode::Char(c) => {
                self.update_value(&draft.name, &draft.quantity, |v| v.push(c));
            }
            _ => {}
        }

        // the editor owns the keyboard while open
        true
    }
}

#[cfg(test)]
#[path = "./editor_tests.rs"]
mod tests;
