use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{generator::GeneratorMsg, system::SystemMsg, ui::UiMsg, Msg},
    raw_msg::RawMsg,
    state::{ui::View, AppState},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],

        // User input - translate based on context
        RawMsg::Key(key) => translate_key_event(key, state),

        // Generation service replies
        RawMsg::GenerationCompleted(text) => {
            vec![Msg::Generator(GeneratorMsg::ResponseReceived(text))]
        }
        RawMsg::GenerationFailed(message) => {
            vec![Msg::Generator(GeneratorMsg::GenerationFailed(message))]
        }

        // Copy feedback expiry
        RawMsg::CopyFeedbackExpired(index) => {
            vec![Msg::Generator(GeneratorMsg::CopyFeedbackExpired(index))]
        }

        // System status
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Frequent events carry no domain meaning
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.active_view == View::Generator && state.ui.is_editing() {
        translate_editing_keys(key)
    } else {
        translate_normal_keys(key, state)
    }
}

/// Key bindings while the description editor has focus
fn translate_editing_keys(key: KeyEvent) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Generator(GeneratorMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Ui(UiMsg::StopEditing)],

        // Everything else is editor input
        _ => vec![Msg::Ui(UiMsg::EditorInput(key))],
    }
}

/// Key bindings in browsing mode
fn translate_normal_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Char('q') => return vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Tab | KeyCode::BackTab => return vec![Msg::Ui(UiMsg::SwitchView)],
        _ => {}
    }

    if state.ui.active_view != View::Generator {
        return vec![];
    }

    match key.code {
        KeyCode::Char('i') | KeyCode::Char('e') => vec![Msg::Ui(UiMsg::StartEditing)],
        KeyCode::Char('g') => vec![Msg::Generator(GeneratorMsg::Submit)],
        KeyCode::Char('j') | KeyCode::Down => vec![Msg::Generator(GeneratorMsg::SelectNext)],
        KeyCode::Char('k') | KeyCode::Up => vec![Msg::Generator(GeneratorMsg::SelectPrev)],
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => {
            vec![Msg::Generator(GeneratorMsg::CopySelected)]
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Digits copy by on-screen ordinal
            let index = (c as usize) - ('1' as usize);
            vec![Msg::Generator(GeneratorMsg::Copy(index))]
        }
        _ => vec![],
    }
}
