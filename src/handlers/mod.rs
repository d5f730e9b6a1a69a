//! Event Handling Module
//!
//! Sits between raw terminal events and the [`crate::app::App`] methods
//! that change state.
//!
//! - **`keys`**: keyboard bindings for every input mode

pub mod keys;
