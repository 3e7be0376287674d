//! # Taggen - Tagline Generator TUI
//!
//! A terminal application that turns a short brand or product description
//! into candidate taglines using the Gemini generative-language API.
//! State management follows an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (network, clipboard, timers)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! Raw terminal and service events enter as [`core::raw_msg::RawMsg`], are
//! translated to domain messages by [`core::translator`], folded into state
//! by [`update()`], and the resulting commands are executed by
//! [`core::cmd_executor::CmdExecutor`].
//!
//! ## Example Usage
//!
//! ```rust
//! use taggen::{core::msg::generator::GeneratorMsg, core::msg::Msg, AppState, update};
//!
//! let mut state = AppState::default();
//! state.config.api_key = "example-key".to_string();
//! state.ui.textarea.content = "artisanal coffee roaster".to_string();
//!
//! let (state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);
//!
//! // The request is now in flight and a generation command was emitted.
//! assert!(state.generator.request.is_loading());
//! assert_eq!(cmds.len(), 1);
//! ```

#![deny(warnings)]

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
