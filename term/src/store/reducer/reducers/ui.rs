//! UI state reducers for notifications and themes.

use std::time::Instant;

use crate::{
    config::Config,
    store::state::{Notification, State},
    ui::colors::Colors,
};

/// Shows a notification, replacing any current one.
pub fn notify(state: &mut State, message: String) {
    state.notification = Some(Notification::new(message));
}

/// Clears the current notification.
pub fn dismiss_notification(state: &mut State) {
    state.notification = None;
}

/// Clears the current notification if it has been visible long enough.
pub fn expire_notification(state: &mut State, now: Instant) {
    if state
        .notification
        .as_ref()
        .is_some_and(|n| n.is_expired(now, state.notification_timeout))
    {
        state.notification = None;
    }
}

/// Switches to the next theme. Returns the updated config for persistence.
pub fn cycle_theme(state: &mut State) -> Config {
    let theme = state.theme.next();
    state.theme = theme;
    state.colors = Colors::new(
        theme.to_palette(state.true_color_enabled),
        state.true_color_enabled,
    );
    state.config.theme = theme.to_string();
    state.config.clone()
}
