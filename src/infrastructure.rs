//! Infrastructure: terminal, configuration, clipboard and the Gemini API

pub mod clipboard;
pub mod config;
pub mod gemini;
pub mod generation_service;
pub mod textarea_engine;
pub mod tui;
