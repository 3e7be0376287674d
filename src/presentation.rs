//! Stateless rendering of [`crate::core::state::AppState`]

pub mod components;
pub mod widgets;
