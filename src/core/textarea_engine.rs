use crossterm::event::KeyEvent;

use crate::core::state::ui::TextAreaState;

/// Engine interface that applies a sequence of key events to an editor
/// snapshot and returns the resulting snapshot. Implementations must be
/// deterministic and free of external side effects so the update path can
/// stay pure.
pub trait TextAreaEngine {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}
