use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::editor::CursorPosition,
};

/// The two views composed under the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum View {
    #[default]
    Generator,
    About,
}

impl View {
    /// Cycle to the next view in tab order
    pub fn next(self) -> Self {
        match self {
            View::Generator => View::About,
            View::About => View::Generator,
        }
    }
}

/// High-level UI mode for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys navigate: switch views, move the selection, copy, quit
    Normal,
    /// Keys are routed to the description editor
    #[default]
    Editing,
}

/// Snapshot of the description editor
/// Encapsulates all editor state so the textarea widget can be recreated
/// from it on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: String, cursor: CursorPosition) -> Self {
        Self { content, cursor }
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_view: View,
    pub mode: UiMode,
    pub textarea: TextAreaState,
    /// Queue for stateless editor key processing; drained by the runtime
    pub pending_input_keys: Vec<KeyEvent>,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.mode == UiMode::Editing
    }

    pub fn is_normal(&self) -> bool {
        self.mode == UiMode::Normal
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::SwitchView => {
                self.active_view = self.active_view.next();
                vec![]
            }

            UiMsg::StartEditing => {
                self.mode = UiMode::Editing;
                vec![]
            }

            UiMsg::StopEditing => {
                self.mode = UiMode::Normal;
                vec![]
            }

            UiMsg::EditorInput(key) => {
                if self.is_editing() {
                    self.pending_input_keys.push(key);
                }
                vec![]
            }
        }
    }
}
