//! About view
//!
//! Static informational content; no state, no I/O.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// About view component
#[derive(Debug, Clone)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the about view
    pub fn view(&self, state: &AppState, frame: &mut Frame<'_>, area: Rect) {
        let heading = Style::default().fg(Color::Cyan).bold();
        let body = Style::default();
        let dim = Style::default().fg(Color::DarkGray);

        let lines = vec![
            Line::styled("Taggen - Tagline Generator", heading),
            Line::raw(""),
            Line::styled(
                "Taggen turns a short brand or product description into candidate \
                 taglines, generated by the Gemini language model.",
                body,
            ),
            Line::raw(""),
            Line::styled("Our Mission", heading),
            Line::styled(
                "Making professional tagline creation accessible to everyone, from \
                 startups to established brands.",
                body,
            ),
            Line::raw(""),
            Line::styled("Our Values", heading),
            Line::styled(
                "We believe in innovation, creativity, and making powerful branding \
                 tools accessible to brands of all sizes.",
                body,
            ),
            Line::raw(""),
            Line::styled("How It Works", heading),
            Line::styled(
                "Your description is embedded into a fixed instruction template and \
                 sent to the generation API. The response is split into lines; each \
                 non-empty line becomes a candidate tagline you can copy straight to \
                 the clipboard.",
                body,
            ),
            Line::raw(""),
            Line::styled("Our Commitment", heading),
            Line::styled(
                "We aim for a reliable, friendly tool that helps brands find their \
                 perfect tagline, and we keep improving it based on feedback.",
                body,
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Support this tool: ", dim),
                Span::styled(
                    state.config.donation_url.clone(),
                    Style::default().fg(Color::Cyan).italic(),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("About")
                    .padding(Padding::new(2, 2, 1, 1)),
            );
        frame.render_widget(paragraph, area);
    }
}

impl Default for AboutComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_is_stateless() {
        let a = AboutComponent::new();
        let b = AboutComponent;

        // All instances are equivalent
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
