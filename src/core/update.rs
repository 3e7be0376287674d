use crate::core::{
    cmd::Cmd,
    msg::{generator::GeneratorMsg, Msg},
    state::AppState,
};

/// Message shown when generation is requested without a configured API key
pub const MISSING_API_KEY_MESSAGE: &str =
    "API key not configured. Please add your Gemini API key to continue.";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        // Submit reads editor and config state, so it is coordinated here
        Msg::Generator(GeneratorMsg::Submit) => submit(state),

        // Remaining generator messages (delegated to GeneratorState)
        Msg::Generator(generator_msg) => {
            let commands = state.generator.update(generator_msg);
            (state, commands)
        }
    }
}

/// Handle a submission request against the current editor and config state.
///
/// The loading flag is the only concurrency control: while a request is in
/// flight, further submissions are dropped without any observable effect.
fn submit(mut state: AppState) -> (AppState, Vec<Cmd>) {
    if state.generator.request.is_loading() {
        return (state, vec![]);
    }

    let description = state.trimmed_description().to_string();
    if description.is_empty() {
        return (state, vec![]);
    }

    if state.config.api_key_missing() {
        state.generator.fail(MISSING_API_KEY_MESSAGE.to_string());
        return (state, vec![]);
    }

    state.generator.begin_request();
    (state, vec![Cmd::GenerateTaglines { description }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        msg::{system::SystemMsg, ui::UiMsg},
        state::RequestState,
    };

    fn create_test_state() -> AppState {
        let mut state = AppState::default();
        state.config.api_key = "test-key".to_string();
        state
    }

    #[test]
    fn test_update_quit() {
        let state = create_test_state();

        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_update_switch_view() {
        let state = create_test_state();

        let (new_state, cmds) = update(Msg::Ui(UiMsg::SwitchView), state);

        assert_eq!(
            new_state.ui.active_view,
            crate::core::state::ui::View::About
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_submit_emits_generation_command() {
        let mut state = create_test_state();
        state.ui.textarea.content = "  a neighborhood bakery  ".to_string();

        let (new_state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);

        assert!(new_state.generator.request.is_loading());
        assert_eq!(
            cmds,
            vec![Cmd::GenerateTaglines {
                description: "a neighborhood bakery".to_string()
            }]
        );
    }

    #[test]
    fn test_submit_empty_description_is_noop() {
        let mut state = create_test_state();
        state.ui.textarea.content = "   \n\t ".to_string();
        state.generator.taglines = vec!["Keep Me".to_string()];

        let (new_state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);

        assert!(cmds.is_empty());
        assert!(new_state.generator.request.is_idle());
        assert_eq!(new_state.generator.taglines, vec!["Keep Me"]);
    }

    #[test]
    fn test_submit_while_loading_is_noop() {
        let mut state = create_test_state();
        state.ui.textarea.content = "a bakery".to_string();
        state.generator.request = RequestState::Loading;

        let (new_state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);

        assert!(cmds.is_empty());
        assert!(new_state.generator.request.is_loading());
    }

    #[test]
    fn test_submit_without_api_key_fails_without_command() {
        let mut state = AppState::default();
        state.ui.textarea.content = "a bakery".to_string();

        let (new_state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);

        assert!(cmds.is_empty());
        assert_eq!(
            new_state.generator.request.error_message(),
            Some(MISSING_API_KEY_MESSAGE)
        );
        assert!(new_state.generator.taglines.is_empty());
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut state = create_test_state();
        state.ui.textarea.content = "a bakery".to_string();
        state.generator.fail("network down".to_string());

        let (new_state, cmds) = update(Msg::Generator(GeneratorMsg::Submit), state);

        assert!(new_state.generator.request.is_loading());
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_update_response_received() {
        let state = create_test_state();

        let (new_state, cmds) = update(
            Msg::Generator(GeneratorMsg::ResponseReceived(
                "Line1\n\nLine2\nLine3".to_string(),
            )),
            state,
        );

        assert!(cmds.is_empty());
        assert_eq!(new_state.generator.taglines, vec!["Line1", "Line2", "Line3"]);
    }

    #[test]
    fn test_update_copy_flow() {
        let mut state = create_test_state();
        state.generator.taglines = vec!["One".to_string(), "Two".to_string()];

        let (state, cmds) = update(Msg::Generator(GeneratorMsg::Copy(0)), state);
        assert_eq!(state.generator.copied_index, Some(0));
        assert_eq!(cmds.len(), 1);

        let (state, cmds) = update(Msg::Generator(GeneratorMsg::CopyFeedbackExpired(0)), state);
        assert_eq!(state.generator.copied_index, None);
        assert!(cmds.is_empty());
    }
}
