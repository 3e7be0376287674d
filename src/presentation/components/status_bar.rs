//! Status bar component
//!
//! Displays status information at the bottom of the screen.
//! This is a pure, stateless component that renders status data from AppState.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{ui::View, AppState, RequestState};

/// Status bar component
///
/// Renders two lines: global key hints, and a status message derived from
/// the request state (a system status message takes precedence).
#[derive(Debug, Clone)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar into its two-line area
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // Key hints line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        let hints = Span::styled(
            Self::key_hints(state),
            Style::default().fg(Color::Gray).italic(),
        );
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().bg(Color::Black)),
            layout[0],
        );

        let message_line = Paragraph::new(Self::status_message(state));
        frame.render_widget(message_line, layout[1]);
    }

    /// Global key hints for the current context
    pub fn key_hints(state: &AppState) -> &'static str {
        if state.ui.active_view == View::Generator && state.ui.is_editing() {
            "Ctrl-C: quit  Esc: browse  Ctrl-S: generate"
        } else {
            "q: quit  Tab: switch view"
        }
    }

    /// The status line: explicit system messages win, otherwise the message
    /// is derived from the request state
    pub fn status_message(state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return message.clone();
        }

        match &state.generator.request {
            RequestState::Idle => "Describe your brand and generate taglines".to_string(),
            RequestState::Loading => "Crafting taglines...".to_string(),
            RequestState::Succeeded => {
                format!(
                    "Generated {} taglines - copy one with Enter or its number",
                    state.generator.taglines.len()
                )
            }
            RequestState::Failed(_) => "Generation failed - edit the description and retry".to_string(),
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
