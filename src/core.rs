//! Elm-like application core
//!
//! Pure state, messages and update logic, plus the command executor that
//! bridges emitted commands to infrastructure channels.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
