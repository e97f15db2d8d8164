//! Scrollable list of shopping items with row selection.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, ScrollbarState, Widget},
};
use shoplist_lib::item::ItemId;
use std::{cell::RefCell, rc::Rc};

use crate::{
    store::{Dispatcher, action::Action, state::State},
    ui::components::scrollbar::ScrollBar,
};

use super::{
    editor::EditorView,
    row::{ROW_HEIGHT, RowView},
    traits::{
        CustomStatefulWidget, CustomWidget, CustomWidgetContext,
        CustomWidgetRef, EventHandler, View,
    },
};

const EMPTY_LIST_HINT: &str = "Your list is empty, press (a) to add an item";

pub struct ShoppingListView {
    dispatcher: Rc<dyn Dispatcher>,
    editor: EditorView,
    selected: RefCell<usize>,
    offset: RefCell<usize>,
}

impl ShoppingListView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            editor: EditorView::new(Rc::clone(&dispatcher)),
            dispatcher,
            selected: RefCell::new(0),
            offset: RefCell::new(0),
        }
    }

    /// Index of the highlighted row, clamped to the current list length
    pub fn selected_index(&self, state: &State) -> Option<usize> {
        if state.list.is_empty() {
            return None;
        }
        let last = state.list.len() - 1;
        Some((*self.selected.borrow()).min(last))
    }

    fn next(&self, state: &State) {
        if let Some(i) = self.selected_index(state) {
            let last = state.list.len() - 1;
            // don't wrap
            *self.selected.borrow_mut() = (i + 1).min(last);
        }
    }

    fn previous(&self, state: &State) {
        if let Some(i) = self.selected_index(state) {
            *self.selected.borrow_mut() = i.saturating_sub(1);
        }
    }

    fn selected_id_action<F>(&self, state: &State, f: F)
    where
        F: Fn(ItemId) -> Action,
    {
        if let Some(item) =
            self.selected_index(state).and_then(|i| state.list.items().get(i))
        {
            self.dispatcher.dispatch(f(item.id));
        }
    }

    /// Keeps the selected row inside a viewport of `visible` rows and
    /// returns the first row to draw.
    fn scroll_offset(&self, selected: usize, visible: usize) -> usize {
        let mut offset = *self.offset.borrow();

        if selected < offset {
            offset = selected;
        } else if visible > 0 && selected >= offset + visible {
            offset = selected + 1 - visible;
        }

        *self.offset.borrow_mut() = offset;
        offset
    }

    fn render_empty(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [_, hint_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(EMPTY_LIST_HINT)
            .style(Style::new().fg(ctx.state.colors.gray))
            .centered()
            .render(hint_area, buf);
    }
}

impl View for ShoppingListView {
    fn legend(&self, state: &State) -> &str {
        if state.list.editing_item().is_some() {
            "(tab) switch field, (enter) save, (esc) cancel"
        } else if state.list.is_empty() {
            "(a) add, (t) theme, (q) quit"
        } else {
            "(j/k) select, (a) add, (e) edit, (d) delete, (t) theme, (q) quit"
        }
    }
}

impl CustomWidgetRef for ShoppingListView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let Some(selected) = self.selected_index(ctx.state) else {
            self.render_empty(area, buf, ctx);
            return Ok(());
        };

        // rows + right aligned scrollbar
        let [list_area, scroll_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(1)])
                .areas(area);

        let items = ctx.state.list.items();
        let visible = (list_area.height / ROW_HEIGHT) as usize;
        let offset = self.scroll_offset(selected, visible);

        for (pos, (idx, item)) in
            items.iter().enumerate().skip(offset).take(visible).enumerate()
        {
            let row_area = Rect {
                y: list_area.y + pos as u16 * ROW_HEIGHT,
                height: ROW_HEIGHT,
                ..list_area
            };

            if item.is_editing {
                self.editor.render_ref(row_area, buf, ctx)?;
            } else {
                RowView::new(item)
                    .selected(idx == selected)
                    .render(row_area, buf, ctx);
            }
        }

        let content_length = items.len() * ROW_HEIGHT as usize;
        let mut scroll_state = ScrollbarState::new(content_length)
            .position(selected * ROW_HEIGHT as usize);
        ScrollBar::new(content_length).render(
            scroll_area,
            buf,
            &mut scroll_state,
            ctx,
        );

        Ok(())
    }
}

impl EventHandler for ShoppingListView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if ctx.state.list.draft().visible {
            return false;
        }

        if ctx.state.list.editing_item().is_some() {
            return self.editor.process_event(evt, ctx);
        }

        let Event::Key(key) = evt else {
            return false;
        };

        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(ctx.state),
            KeyCode::Char('k') | KeyCode::Up => self.previous(ctx.state),
            KeyCode::Char('a') => {
                self.dispatcher.dispatch(Action::OpenAddDialog);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                self.selected_id_action(ctx.state, Action::BeginEdit);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_id_action(ctx.state, Action::Delete);
            }
            _ => return false,
        }

        true
    }
}

#[cfg(test)]
#[path = "./shopping_list_tests.rs"]
mod tests;
