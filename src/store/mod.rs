//! Application state store.
//!
//! All entities live in one [`AppState`] owned by a [`Store`]. The only way
//! to change it is to dispatch an [`Action`], which the reducer applies in
//! full before `dispatch` returns.
//!
//! ```text
//! key press --> Action --> reduce(state, action) --> new AppState --> redraw
//! ```

mod action;
mod reducer;
mod state;

#[cfg(test)]
mod tests;

pub use action::{Action, NewFolder, NewNote, NewShortcut};
pub use reducer::{reduce, reduce_at};
pub use state::{AppState, TabView};

/// Single owner of the application state.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}
