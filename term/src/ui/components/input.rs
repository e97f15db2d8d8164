//! Editable text input component.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// State for an input field (editing mode and current value).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

impl InputState {
    pub fn new<S: Into<String>>(value: S, editing: bool) -> Self {
        Self {
            editing,
            value: value.into(),
        }
    }
}

/// Labeled text input that highlights when in edit mode.
pub struct Input {
    label: String,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
        }
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let label = Span::from(format!("{0}: ", self.label))
            .style(Style::default().fg(ctx.state.colors.label));
        let mut style = Style::default().fg(ctx.state.colors.text);
        if state.editing {
            style = style.fg(ctx.state.colors.input_editing);
        }
        let value = Span::from(state.value.as_str()).style(style);
        let mut spans = vec![label, value];
        if state.editing {
            // block cursor at the end of the value
            spans.push(
                Span::from(" ").style(
                    Style::default()
                        .bg(ctx.state.colors.input_editing)
                        .add_modifier(Modifier::SLOW_BLINK),
                ),
            );
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
