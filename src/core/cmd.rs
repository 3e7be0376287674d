use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects (network calls, clipboard writes, logging).
/// Cmd captures application intent (what to do); the executor and the
/// generation service capture execution details (how to do it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Ask the generation service for taglines
    GenerateTaglines {
        description: String,
    },

    /// Write a tagline to the system clipboard and schedule feedback expiry
    CopyToClipboard {
        text: String,
        index: usize,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command leaves the synchronous executor path
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::GenerateTaglines { .. } | Cmd::CopyToClipboard { .. } => true,

            Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_async),
        }
    }

    /// Human-readable command name for logs
    pub fn name(&self) -> String {
        match self {
            Cmd::GenerateTaglines { .. } => "GenerateTaglines".to_string(),
            Cmd::CopyToClipboard { .. } => "CopyToClipboard".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::LogInfo {
            message: "test".to_string(),
        };
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        // Batch should wrap when there are 2+ commands
        let cmds = vec![
            Cmd::GenerateTaglines {
                description: "a".to_string(),
            },
            Cmd::None,
        ];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::GenerateTaglines {
            description: "test".to_string()
        }
        .is_async());

        assert!(Cmd::CopyToClipboard {
            text: "test".to_string(),
            index: 0
        }
        .is_async());

        assert!(!Cmd::LogInfo {
            message: "test".to_string()
        }
        .is_async());

        let batch = Cmd::Batch(vec![Cmd::None, Cmd::CopyToClipboard {
            text: "t".to_string(),
            index: 0,
        }]);
        assert!(batch.is_async());
    }

    #[test]
    fn test_cmd_name() {
        assert_eq!(
            Cmd::GenerateTaglines {
                description: "x".to_string()
            }
            .name(),
            "GenerateTaglines"
        );
        assert_eq!(Cmd::Batch(vec![Cmd::None, Cmd::None]).name(), "Batch(2)");
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::CopyToClipboard {
            text: "Brew Different".to_string(),
            index: 2,
        };

        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
