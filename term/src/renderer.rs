//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use ratatui::{
    Terminal,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    layout::Rect,
    prelude::Backend,
};
use std::{
    cell::RefCell,
    io,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::{
    store::{Dispatcher, StateGetter, Store, action::Action},
    ui::{
        app::{App, Application},
        views::traits::CustomWidgetContext,
    },
};

const POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Whether the render loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Draws the application and feeds it terminal events.
///
/// Manages the terminal lifecycle (raw mode, alternate screen) and runs the
/// render loop until the user quits.
pub struct Renderer<B: Backend> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    app: Box<dyn Application>,
}

impl<B: Backend> Renderer<B> {
    pub fn new(terminal: Terminal<B>, store: Rc<Store>) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            app: Box::new(App::new(Rc::clone(&store) as Rc<dyn Dispatcher>)),
            store,
        }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let result = self.start_loop();
        // restore the terminal even when the loop fails
        self.exit()?;
        result
    }

    fn start_loop(&self) -> Result<()> {
        loop {
            if self.store.get_state().notification.is_some() {
                self.store.dispatch(Action::ExpireNotification(Instant::now()));
            }

            self.render_frame()?;

            // poll so expired notifications are cleared without input
            if event::poll(POLL_INTERVAL)? {
                let evt = event::read()?;

                if self.handle_event(&evt) == LoopControl::Quit {
                    return Ok(());
                }
            }
        }
    }

    /// Draws a single frame from the latest state.
    pub fn render_frame(&self) -> Result<()> {
        let state = self.store.get_state();
        let mut result = Ok(());

        self.terminal
            .borrow_mut()
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state: &state,
                    app_area: f.area(),
                };
                result = self.app.render_ref(f.area(), f.buffer_mut(), &ctx);
            })
            .map_err(|e| eyre!("failed to render: {}", e))?;

        result
    }

    /// Routes a terminal event to the app and decides whether to quit.
    pub fn handle_event(&self, evt: &Event) -> LoopControl {
        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
            && key.code == KeyCode::Char('c')
            && key.modifiers == KeyModifiers::CONTROL
        {
            // do not allow overriding ctrl-c
            log::info!("received control-c sequence");
            return LoopControl::Quit;
        }

        let state = self.store.get_state();
        let area = self
            .terminal
            .borrow()
            .size()
            .map(|s| Rect::new(0, 0, s.width, s.height))
            .unwrap_or_default();

        let ctx = CustomWidgetContext {
            state: &state,
            app_area: area,
        };

        let handled = self.app.process_event(evt, &ctx);

        match evt {
            // allow overriding q key
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.code == KeyCode::Char('q')
                    && !handled =>
            {
                log::info!("quitting");
                LoopControl::Quit
            }
            _ => LoopControl::Continue,
        }
    }

    fn enable_terminal_raw_mode(&self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        self.terminal
            .borrow_mut()
            .clear()
            .map_err(|e| eyre!("failed to clear terminal: {}", e))?;
        Ok(())
    }

    fn exit(&self) -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal
            .borrow_mut()
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
