use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_resume() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        assert!(cmds.is_empty());

        let cmds = system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_status_message_flow() {
        let mut system = SystemState::default();
        assert!(system.status_message.is_none());

        let cmds = system.update(SystemMsg::UpdateStatusMessage("Copied".to_string()));
        assert!(cmds.is_empty());
        assert_eq!(system.status_message, Some("Copied".to_string()));

        let cmds = system.update(SystemMsg::ClearStatusMessage);
        assert!(cmds.is_empty());
        assert!(system.status_message.is_none());
    }

    #[test]
    fn test_show_error() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::ShowError("clipboard unavailable".to_string()));

        assert!(cmds.is_empty());
        assert_eq!(
            system.status_message,
            Some("Error: clipboard unavailable".to_string())
        );
    }
}
