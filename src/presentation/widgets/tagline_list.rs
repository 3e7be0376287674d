use ratatui::{prelude::*, widgets::*};

/// Result list widget
///
/// Renders the taglines with their on-screen ordinal, the keyboard
/// selection, and the transient copy feedback marker.
pub struct TaglineList<'a> {
    taglines: &'a [String],
    selected: Option<usize>,
    copied: Option<usize>,
}

impl<'a> TaglineList<'a> {
    pub fn new(taglines: &'a [String], selected: Option<usize>, copied: Option<usize>) -> Self {
        Self {
            taglines,
            selected,
            copied,
        }
    }

    fn item_line(&self, index: usize, tagline: &'a str) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(tagline),
        ];

        if self.copied == Some(index) {
            spans.push(Span::styled(
                "  ✓ Copied!",
                Style::default().fg(Color::Green).bold(),
            ));
        }

        Line::from(spans)
    }
}

impl<'a> Widget for TaglineList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Taglines")
            .padding(Padding::new(1, 1, 0, 0));

        if self.taglines.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No taglines yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = self
            .taglines
            .iter()
            .enumerate()
            .map(|(index, tagline)| ListItem::new(self.item_line(index, tagline)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow).bold())
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
