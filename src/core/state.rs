pub mod generator;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

pub use generator::{GeneratorState, RequestState};
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub generator: GeneratorState,
    pub system: SystemState,
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The description as it would be submitted
    pub fn trimmed_description(&self) -> &str {
        self.ui.textarea.content.trim()
    }

    /// Get the currently selected tagline, if any
    pub fn selected_tagline(&self) -> Option<&str> {
        self.generator
            .selected_index
            .and_then(|i| self.generator.taglines.get(i))
            .map(String::as_str)
    }
}
