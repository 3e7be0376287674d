use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::core::state::{ui::View, AppState};

/// Tab bar component
///
/// One tab per view; the active view is highlighted.
#[derive(Debug, Clone)]
pub struct TabBarComponent;

impl TabBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the tab bar
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let titles: Vec<String> = View::iter().map(|view| view.to_string()).collect();
        let selected = Self::selected_index(state.ui.active_view);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(Style::default().fg(Color::Yellow).bold())
            .divider(" | ");
        frame.render_widget(tabs, area);
    }

    /// Position of the view in tab order
    pub fn selected_index(view: View) -> usize {
        View::iter().position(|v| v == view).unwrap_or(0)
    }
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
