use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::{state::ui::TextAreaState, textarea_engine::TextAreaEngine},
    domain::editor::CursorPosition,
};

/// Production engine based on tui-textarea. It constructs a temporary
/// TextArea, hydrates it from the given snapshot, applies the keys, then
/// extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            snapshot.cursor.line as u16,
            snapshot.cursor.column as u16,
        ));

        for key in keys {
            textarea.input(Event::Key(*key));
        }

        let content = textarea.lines().join("\n");
        let (line, column) = textarea.cursor();
        TextAreaState::new(content, CursorPosition { line, column })
    }
}
