//! Generator view
//!
//! The description editor, the action hint, the error panel and the result
//! list. All data comes from AppState; the only local state is the textarea
//! widget kept in sync for rendering.

use ratatui::{prelude::*, widgets::*};
use tui_textarea::TextArea;

use crate::{
    core::state::{ui::UiMode, AppState},
    domain::editor::CursorPosition,
    presentation::widgets::tagline_list::TaglineList,
};

const PLACEHOLDER: &str = "Describe your brand, product, or business...";

/// Generator view component
///
/// Stateless with respect to the application: the internal TextArea is a
/// render cache rebuilt whenever the editor snapshot in AppState changes.
pub struct GeneratorComponent<'a> {
    textarea: TextArea<'a>,
    last_synced_content: String,
    last_synced_cursor: CursorPosition,
}

impl<'a> GeneratorComponent<'a> {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        Self {
            textarea,
            last_synced_content: String::new(),
            last_synced_cursor: CursorPosition::default(),
        }
    }

    /// Render the generator view
    pub fn view(&mut self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        self.sync_textarea(state);

        let error_height = match state.generator.request.error_message() {
            Some(_) => 3,
            None => 0,
        };
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(6),            // Description editor
                Constraint::Length(1),            // Action hint
                Constraint::Length(error_height), // Error panel (when failed)
                Constraint::Min(0),               // Result list
                Constraint::Length(1),            // Support footer
            ],
        )
        .split(area);

        self.render_editor(state, frame, layout[0]);
        self.render_action_hint(state, frame, layout[1]);
        if let Some(message) = state.generator.request.error_message() {
            self.render_error(message, frame, layout[2]);
        }
        frame.render_widget(
            TaglineList::new(
                &state.generator.taglines,
                state.generator.selected_index,
                state.generator.copied_index,
            ),
            layout[3],
        );
        self.render_footer(state, frame, layout[4]);
    }

    /// Rebuild the textarea cache when the snapshot changed
    fn sync_textarea(&mut self, state: &AppState) {
        let snapshot = &state.ui.textarea;
        if self.last_synced_content != snapshot.content || self.last_synced_cursor != snapshot.cursor
        {
            let mut textarea = TextArea::default();
            textarea.set_placeholder_text(PLACEHOLDER);
            if !snapshot.content.is_empty() {
                textarea.insert_str(&snapshot.content);
            }
            textarea.move_cursor(tui_textarea::CursorMove::Jump(
                snapshot.cursor.line as u16,
                snapshot.cursor.column as u16,
            ));
            self.textarea = textarea;
            self.last_synced_content = snapshot.content.clone();
            self.last_synced_cursor = snapshot.cursor;
        }
    }

    fn render_editor(&mut self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let title = match state.ui.mode {
            UiMode::Editing => "Brand description (editing)",
            UiMode::Normal => "Brand description",
        };
        let border_style = match state.ui.mode {
            UiMode::Editing => Style::default().fg(Color::Yellow),
            UiMode::Normal => Style::default(),
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        // Hide the cursor while browsing
        self.textarea.set_cursor_style(match state.ui.mode {
            UiMode::Editing => Style::default().add_modifier(Modifier::REVERSED),
            UiMode::Normal => Style::default(),
        });
        frame.render_widget(&self.textarea, area);
    }

    fn render_action_hint(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let hint = Self::action_hint(state);
        let style = if state.generator.request.is_loading() {
            Style::default().fg(Color::Yellow).italic()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(hint).style(style), area);
    }

    fn render_error(&self, message: &str, frame: &mut Frame<'_>, area: Rect) {
        let error = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Error"),
            );
        frame.render_widget(error, area);
    }

    fn render_footer(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let footer = Line::from(vec![
            Span::styled("Support this tool: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                state.config.donation_url.clone(),
                Style::default().fg(Color::Cyan).italic(),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }

    /// The hint below the editor, derived from mode and request state
    pub fn action_hint(state: &AppState) -> &'static str {
        if state.generator.request.is_loading() {
            return "Crafting taglines...";
        }
        match state.ui.mode {
            UiMode::Editing => "Ctrl-S: generate taglines  Esc: browse results",
            UiMode::Normal => "g: generate  i: edit  j/k: select  Enter/c: copy  1-5: copy by number",
        }
    }
}

impl<'a> Default for GeneratorComponent<'a> {
    fn default() -> Self {
        Self::new()
    }
}
