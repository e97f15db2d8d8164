//! Application state definitions.

use std::time::{Duration, Instant};

use shoplist_lib::controller::ListController;

use crate::{
    config::{Config, DEFAULT_NOTIFICATION_TIMEOUT},
    ui::colors::{Colors, Theme},
};

/// Short lived message shown on top of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Returns true once `timeout` has passed since creation.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= timeout
    }
}

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub config: Config,
    pub list: ListController,
    pub notification: Option<Notification>,
    pub notification_timeout: Duration,
}

impl State {
    /// Builds the initial state from the loaded config.
    pub fn new(config: Config, true_color_enabled: bool) -> Self {
        let theme = Theme::from_string(&config.theme);
        let palette = theme.to_palette(true_color_enabled);
        let colors = Colors::new(palette, true_color_enabled);
        let notification_timeout = config.notification_timeout();

        Self {
            true_color_enabled,
            theme,
            colors,
            config,
            list: ListController::new(),
            notification: None,
            notification_timeout,
        }
    }

    /// Returns true when a dialog or the inline editor is capturing
    /// keystrokes.
    pub fn is_capturing_input(&self) -> bool {
        self.list.draft().visible || self.list.editing_item().is_some()
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            true_color_enabled: true,
            theme: Theme::default(),
            colors: Colors::default(),
            config: Config::default(),
            list: ListController::new(),
            notification: None,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        }
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
