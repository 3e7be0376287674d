use crate::{
    core::{cmd::Cmd, msg::generator::GeneratorMsg},
    domain::tagline,
};

/// Lifecycle of the single outstanding generation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded,
    /// Carries the single user-facing error message
    Failed(String),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        *self == RequestState::Idle
    }

    pub fn is_loading(&self) -> bool {
        *self == RequestState::Loading
    }

    /// The error message when the last request failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Generator view state: the result list and the request lifecycle
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    /// Taglines from the last successful call, in response order
    pub taglines: Vec<String>,
    pub request: RequestState,
    /// Keyboard cursor over the result list
    pub selected_index: Option<usize>,
    /// Index currently showing copy feedback
    pub copied_index: Option<usize>,
}

impl GeneratorState {
    /// Mark the request as in flight. The previous result list stays visible
    /// until it is replaced or the request fails.
    pub fn begin_request(&mut self) {
        self.request = RequestState::Loading;
    }

    /// Fail the request: the result list is cleared and the message is kept
    /// for display.
    pub fn fail(&mut self, message: String) {
        self.request = RequestState::Failed(message);
        self.taglines.clear();
        self.selected_index = None;
        self.copied_index = None;
    }

    /// Generator-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: GeneratorMsg) -> Vec<Cmd> {
        match msg {
            // Submit is cross-cutting and handled by the coordinator
            GeneratorMsg::Submit => vec![],

            GeneratorMsg::ResponseReceived(text) => {
                self.taglines = tagline::parse_taglines(&text);
                self.request = RequestState::Succeeded;
                self.selected_index = if self.taglines.is_empty() {
                    None
                } else {
                    Some(0)
                };
                self.copied_index = None;
                vec![]
            }

            GeneratorMsg::GenerationFailed(message) => {
                self.fail(message);
                vec![]
            }

            GeneratorMsg::SelectNext => {
                if !self.taglines.is_empty() {
                    let last = self.taglines.len() - 1;
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => (i + 1).min(last),
                        None => 0,
                    });
                }
                vec![]
            }

            GeneratorMsg::SelectPrev => {
                if !self.taglines.is_empty() {
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => i.saturating_sub(1),
                        None => 0,
                    });
                }
                vec![]
            }

            GeneratorMsg::Copy(index) => self.copy(index),

            GeneratorMsg::CopySelected => match self.selected_index {
                Some(index) => self.copy(index),
                None => vec![],
            },

            GeneratorMsg::CopyFeedbackExpired(index) => {
                // Ignore stale expiries so a newer copy keeps its feedback
                if self.copied_index == Some(index) {
                    self.copied_index = None;
                }
                vec![]
            }
        }
    }

    fn copy(&mut self, index: usize) -> Vec<Cmd> {
        match self.taglines.get(index) {
            Some(text) => {
                self.copied_index = Some(index);
                vec![Cmd::CopyToClipboard {
                    text: text.clone(),
                    index,
                }]
            }
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_taglines(taglines: &[&str]) -> GeneratorState {
        GeneratorState {
            taglines: taglines.iter().map(ToString::to_string).collect(),
            request: RequestState::Succeeded,
            selected_index: Some(0),
            copied_index: None,
        }
    }

    #[test]
    fn test_response_replaces_list_wholesale() {
        let mut generator = state_with_taglines(&["Old One", "Old Two"]);

        let cmds = generator.update(GeneratorMsg::ResponseReceived(
            "Line1\n\nLine2\nLine3".to_string(),
        ));

        assert!(cmds.is_empty());
        assert_eq!(generator.taglines, vec!["Line1", "Line2", "Line3"]);
        assert_eq!(generator.request, RequestState::Succeeded);
        assert_eq!(generator.selected_index, Some(0));
    }

    #[test]
    fn test_empty_response_yields_empty_list() {
        let mut generator = GeneratorState::default();

        generator.update(GeneratorMsg::ResponseReceived("\n  \n".to_string()));

        assert!(generator.taglines.is_empty());
        assert_eq!(generator.request, RequestState::Succeeded);
        assert_eq!(generator.selected_index, None);
    }

    #[test]
    fn test_failure_clears_list_and_keeps_message() {
        let mut generator = state_with_taglines(&["One", "Two"]);
        generator.copied_index = Some(1);

        let cmds = generator.update(GeneratorMsg::GenerationFailed("quota exceeded".to_string()));

        assert!(cmds.is_empty());
        assert!(generator.taglines.is_empty());
        assert_eq!(generator.request.error_message(), Some("quota exceeded"));
        assert_eq!(generator.selected_index, None);
        assert_eq!(generator.copied_index, None);
    }

    #[test]
    fn test_selection_clamps_to_bounds() {
        let mut generator = state_with_taglines(&["One", "Two", "Three"]);

        generator.update(GeneratorMsg::SelectNext);
        generator.update(GeneratorMsg::SelectNext);
        generator.update(GeneratorMsg::SelectNext);
        assert_eq!(generator.selected_index, Some(2));

        generator.update(GeneratorMsg::SelectPrev);
        generator.update(GeneratorMsg::SelectPrev);
        generator.update(GeneratorMsg::SelectPrev);
        assert_eq!(generator.selected_index, Some(0));
    }

    #[test]
    fn test_selection_noop_on_empty_list() {
        let mut generator = GeneratorState::default();

        generator.update(GeneratorMsg::SelectNext);
        assert_eq!(generator.selected_index, None);

        generator.update(GeneratorMsg::SelectPrev);
        assert_eq!(generator.selected_index, None);
    }

    #[test]
    fn test_copy_emits_clipboard_command() {
        let mut generator = state_with_taglines(&["One", "Two"]);

        let cmds = generator.update(GeneratorMsg::Copy(1));

        assert_eq!(generator.copied_index, Some(1));
        assert_eq!(
            cmds,
            vec![Cmd::CopyToClipboard {
                text: "Two".to_string(),
                index: 1,
            }]
        );
    }

    #[test]
    fn test_copy_out_of_bounds_is_noop() {
        let mut generator = state_with_taglines(&["One"]);

        let cmds = generator.update(GeneratorMsg::Copy(5));

        assert!(cmds.is_empty());
        assert_eq!(generator.copied_index, None);
    }

    #[test]
    fn test_copy_selected_uses_cursor() {
        let mut generator = state_with_taglines(&["One", "Two"]);
        generator.selected_index = Some(1);

        let cmds = generator.update(GeneratorMsg::CopySelected);

        assert_eq!(generator.copied_index, Some(1));
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_copy_overwrites_previous_feedback() {
        let mut generator = state_with_taglines(&["One", "Two"]);

        generator.update(GeneratorMsg::Copy(0));
        generator.update(GeneratorMsg::Copy(1));

        assert_eq!(generator.copied_index, Some(1));
    }

    #[test]
    fn test_stale_feedback_expiry_is_ignored() {
        let mut generator = state_with_taglines(&["One", "Two"]);

        generator.update(GeneratorMsg::Copy(0));
        generator.update(GeneratorMsg::Copy(1));

        // The timer for the first copy fires after the second copy
        generator.update(GeneratorMsg::CopyFeedbackExpired(0));
        assert_eq!(generator.copied_index, Some(1));

        generator.update(GeneratorMsg::CopyFeedbackExpired(1));
        assert_eq!(generator.copied_index, None);
    }
}
