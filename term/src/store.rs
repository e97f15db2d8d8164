//! Redux-like state container for the terminal UI.

use color_eyre::eyre::Result;
#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::store::{action::Action, effect::Effect, state::State};

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

type EffectHandler = Box<dyn Fn(Effect) -> Result<()>>;

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    effect_handler: Option<EffectHandler>,
}

impl Store {
    /// Creates a new store with the given initial state and reducer.
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            reducer,
            state: RefCell::new(Rc::new(initial_state)),
            effect_handler: None,
        }
    }

    /// Registers the function that performs side effects requested by the
    /// reducer
    pub fn set_effect_handler<F: Fn(Effect) -> Result<()> + 'static>(
        &mut self,
        f: F,
    ) {
        self.effect_handler = Some(Box::new(f))
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action)
        };

        if effect == Effect::None {
            return;
        }

        if let Some(f) = self.effect_handler.as_ref()
            && let Err(e) = f(effect)
        {
            log::error!("failed to apply effect: {e}");
            self.dispatch(Action::Notify(format!("Error: {e}")));
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
