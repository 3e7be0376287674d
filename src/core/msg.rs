use serde::{Deserialize, Serialize};

pub mod generator;
pub mod system;
pub mod ui;

use generator::GeneratorMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Generator operations (delegated to GeneratorState)
    Generator(GeneratorMsg),

    // UI operations (delegated to UiState)
    Ui(UiMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Generator(GeneratorMsg::Submit),
            Msg::Generator(GeneratorMsg::Submit)
        );
        assert_ne!(
            Msg::Ui(UiMsg::StartEditing),
            Msg::Ui(UiMsg::StopEditing)
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Generator(GeneratorMsg::Copy(2));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
