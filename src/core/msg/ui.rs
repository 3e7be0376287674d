use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Cycle to the next view (Generator <-> About)
    SwitchView,

    /// Route subsequent keys to the description editor
    StartEditing,

    /// Return to browsing mode
    StopEditing,

    /// A key destined for the description editor
    EditorInput(KeyEvent),
}
