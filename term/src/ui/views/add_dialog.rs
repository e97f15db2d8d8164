//! Popover form for adding a new shopping item.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::{cell::RefCell, rc::Rc};

use crate::{
    store::{Dispatcher, action::Action, state::State},
    ui::components::{
        input::{Input, InputState},
        popover::base::Popover,
        unit_menu::{UNIT_MENU_HEIGHT, UnitMenu},
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef,
    EventHandler, View,
};

pub const DIALOG_TITLE: &str = "Add Shopping Item";
const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 12;
const UNIT_MENU_WIDTH: u16 = 20;
const UNIT_LABEL: &str = "Unit: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Name,
    Quantity,
    Unit,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Quantity,
            Focus::Quantity => Focus::Unit,
            Focus::Unit => Focus::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::Unit,
            Focus::Quantity => Focus::Name,
            Focus::Unit => Focus::Quantity,
        }
    }
}

pub struct AddDialog {
    dispatcher: Rc<dyn Dispatcher>,
    focus: RefCell<Focus>,
}

impl AddDialog {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            focus: RefCell::new(Focus::Name),
        }
    }

    fn set_focus(&self, focus: Focus) {
        *self.focus.borrow_mut() = focus;
    }

    fn handle_menu_key(&self, code: KeyCode, state: &State) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.dispatcher.dispatch(Action::MoveUnitCursor(-1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dispatcher.dispatch(Action::MoveUnitCursor(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(unit) = state.list.draft().unit_at_cursor() {
                    self.dispatcher.dispatch(Action::SelectUnit(unit));
                }
            }
            KeyCode::Esc => self.dispatcher.dispatch(Action::ToggleUnitMenu),
            _ => {}
        }
    }

    fn handle_input_key(&self, code: KeyCode, state: &State) {
        let draft = state.list.draft();
        let focus = *self.focus.borrow();

        match code {
            KeyCode::Enter => {
                self.set_focus(Focus::Name);
                self.dispatcher.dispatch(Action::ConfirmAdd);
            }
            KeyCode::Backspace | KeyCode::Char(_) => {
                let mut value = match focus {
                    Focus::Quantity => draft.quantity.clone(),
                    _ => draft.name.clone(),
                };

                if let KeyCode::Char(c) = code {
                    value.push(c);
                } else {
                    value.pop();
                }

                let action = match focus {
                    Focus::Quantity => Action::UpdateDraftQuantity(value),
                    _ => Action::UpdateDraftName(value),
                };

                self.dispatcher.dispatch(action);
            }
            _ => {}
        }
    }
}

impl View for AddDialog {
    fn legend(&self, state: &State) -> &str {
        if state.list.draft().unit_menu_expanded {
            "(↑/↓) choose, (enter) select, (esc) close menu"
        } else {
            "(tab) next field, (enter) add, (esc) cancel"
        }
    }
}

impl CustomWidgetRef for AddDialog {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        if !ctx.state.list.draft().visible {
            return Ok(());
        }

        let form = AddDialogForm {
            focus: *self.focus.borrow(),
        };

        Popover::new(&form)
            .title(DIALOG_TITLE)
            .width(DIALOG_WIDTH)
            .height(DIALOG_HEIGHT)
            .render_ref(area, buf, ctx)
    }
}

impl EventHandler for AddDialog {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let draft = ctx.state.list.draft();

        if !draft.visible {
            return false;
        }

        let Event::Key(key) = evt else {
            return false;
        };

        if key.kind != KeyEventKind::Press {
            // the dialog is modal
            return true;
        }

        if draft.unit_menu_expanded {
            self.handle_menu_key(key.code, ctx.state);
            return true;
        }

        let focus = *self.focus.borrow();

        match key.code {
            KeyCode::Tab => self.set_focus(focus.next()),
            KeyCode::BackTab => self.set_focus(focus.previous()),
            KeyCode::Esc => {
                self.set_focus(Focus::Name);
                self.dispatcher.dispatch(Action::CancelAddDialog);
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down
                if focus == Focus::Unit =>
            {
                self.dispatcher.dispatch(Action::ToggleUnitMenu);
            }
            code if focus != Focus::Unit => {
                self.handle_input_key(code, ctx.state)
            }
            _ => {}
        }

        true
    }
}

struct AddDialogForm {
    focus: Focus,
}

impl AddDialogForm {
    fn render_unit_selector(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let draft = ctx.state.list.draft();
        let colors = &ctx.state.colors;

        let mut value_style = Style::new().fg(colors.text);
        if self.focus == Focus::Unit {
            value_style = value_style
                .fg(colors.input_editing)
                .add_modifier(Modifier::BOLD);
        }

        let arrow = if draft.unit_menu_expanded { "▴" } else { "▾" };

        Line::from(vec![
            Span::from(UNIT_LABEL).style(Style::new().fg(colors.label)),
            Span::from(format!("[{} {arrow}]", draft.unit)).style(value_style),
        ])
        .render(area, buf);
    }

    fn render_unit_menu(
        &self,
        selector_area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let menu_area = Rect {
            x: selector_area.x + UNIT_LABEL.len() as u16,
            y: selector_area.y + 1,
            width: UNIT_MENU_WIDTH,
            height: UNIT_MENU_HEIGHT,
        }
        .intersection(ctx.app_area);

        UnitMenu::new(ctx.state.list.draft().menu_cursor)
            .render(menu_area, buf, ctx);
    }
}

impl CustomWidgetRef for AddDialogForm {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let draft = ctx.state.list.draft();

        let [name_area, _, qty_area, _, unit_area, _, hint_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1), // spacer
                Constraint::Length(1),
                Constraint::Length(1), // spacer
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let mut name_state =
            InputState::new(draft.name.as_str(), self.focus == Focus::Name);
        Input::new("Enter Name").render(name_area, buf, &mut name_state, ctx);

        let mut qty_state = InputState::new(
            draft.quantity.as_str(),
            self.focus == Focus::Quantity,
        );
        Input::new("Enter Quantity").render(
            qty_area,
            buf,
            &mut qty_state,
            ctx,
        );

        self.render_unit_selector(unit_area, buf, ctx);

        // the expanded menu drops over the hint line
        if draft.unit_menu_expanded {
            self.render_unit_menu(unit_area, buf, ctx);
        } else {
            Paragraph::new("(tab) next  (enter) add  (esc) cancel")
                .style(Style::new().fg(ctx.state.colors.gray))
                .centered()
                .render(hint_area, buf);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "./add_dialog_tests.rs"]
mod tests;
