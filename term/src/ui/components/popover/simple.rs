use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

/// Message with an optional footer line, used for notifications.
pub struct SimplePopover {
    message: String,
    footer: Option<String>,
}

impl SimplePopover {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            footer: None,
        }
    }

    pub fn footer<F: Into<String>>(mut self, f: F) -> Self {
        self.footer = Some(f.into());
        self
    }
}

impl CustomWidgetRef for SimplePopover {
    fn render_ref(
        &self,
        area: ratatui::prelude::Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let msg = Paragraph::new(self.message.to_string())
            .style(Style::default().fg(ctx.state.colors.text))
            .wrap(Wrap { trim: true })
            .centered();

        if let Some(footer_msg) = self.footer.as_ref() {
            let [msg_area, footer_area] = Layout::vertical([
                Constraint::Fill(1),   // msg
                Constraint::Length(1), // footer
            ])
            .areas(area);

            let footer = Paragraph::new(footer_msg.to_string())
                .style(Style::default().fg(ctx.state.colors.gray))
                .centered();

            msg.render(msg_area, buf);
            footer.render(footer_area, buf);
        } else {
            msg.render(area, buf);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "./simple_tests.rs"]
mod tests;
