use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{cmd::Cmd, raw_msg::RawMsg},
    infrastructure::{clipboard, generation_service::GenerationRequest},
};

/// How long copy feedback stays visible before it reverts
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Command executor that bridges Elm commands to infrastructure channels
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    generation_sender: Option<mpsc::UnboundedSender<GenerationRequest>>,
}

impl CmdExecutor {
    /// Create a new command executor that reports back via raw messages
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_sender,
            generation_sender: None,
        }
    }

    /// Add generation service support to an existing executor
    pub fn set_generation_sender(&mut self, sender: mpsc::UnboundedSender<GenerationRequest>) {
        self.generation_sender = Some(sender);
    }

    /// Execute a single command by routing it to the appropriate channel
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::GenerateTaglines { description } => {
                if let Some(generation_sender) = &self.generation_sender {
                    generation_sender.send(GenerationRequest {
                        description: description.clone(),
                    })?;
                } else {
                    tracing::warn!("GenerateTaglines ignored: generation service not available");
                }
            }

            Cmd::CopyToClipboard { text, index } => {
                // Clipboard writes are fire-and-forget; a headless platform
                // failure must not disturb view state
                if let Err(e) = clipboard::copy_text(text) {
                    tracing::warn!("clipboard write failed: {e}");
                }
                self.schedule_copy_feedback_expiry(*index);
            }

            Cmd::LogError { message } => {
                tracing::error!("command error: {message}");
            }

            Cmd::LogInfo { message } => {
                tracing::info!("command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, logging failures without aborting the batch
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<()> {
        for cmd in commands {
            if let Err(e) = self.execute_command(cmd) {
                tracing::error!("failed to execute {}: {e}", cmd.name());
            }
        }

        Ok(())
    }

    /// Arrange for the copy feedback on `index` to expire after the fixed
    /// display window. Stale expiries are filtered in the update path.
    fn schedule_copy_feedback_expiry(&self, index: usize) {
        let raw_sender = self.raw_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK_TTL).await;
            let _ = raw_sender.send(RawMsg::CopyFeedbackExpired(index));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_executor() -> (
        CmdExecutor,
        mpsc::UnboundedReceiver<RawMsg>,
        mpsc::UnboundedReceiver<GenerationRequest>,
    ) {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (gen_tx, gen_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new(raw_tx);
        executor.set_generation_sender(gen_tx);
        (executor, raw_rx, gen_rx)
    }

    #[test]
    fn test_execute_generate_routes_to_service() {
        let (executor, _raw_rx, mut gen_rx) = create_test_executor();

        executor
            .execute_command(&Cmd::GenerateTaglines {
                description: "a tea house".to_string(),
            })
            .unwrap();

        let request = gen_rx.try_recv().unwrap();
        assert_eq!(request.description, "a tea house");
    }

    #[test]
    fn test_execute_generate_without_service_is_dropped() {
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(raw_tx);

        executor
            .execute_command(&Cmd::GenerateTaglines {
                description: "a tea house".to_string(),
            })
            .unwrap();
        // Dropped with a warning; nothing to assert beyond not erroring
    }

    #[test]
    fn test_execute_none() {
        let (executor, mut raw_rx, mut gen_rx) = create_test_executor();

        executor.execute_command(&Cmd::None).unwrap();

        assert!(raw_rx.try_recv().is_err());
        assert!(gen_rx.try_recv().is_err());
    }

    #[test]
    fn test_execute_batch() {
        let (executor, _raw_rx, mut gen_rx) = create_test_executor();

        let batch = Cmd::Batch(vec![
            Cmd::GenerateTaglines {
                description: "one".to_string(),
            },
            Cmd::GenerateTaglines {
                description: "two".to_string(),
            },
        ]);

        executor.execute_command(&batch).unwrap();

        assert_eq!(gen_rx.try_recv().unwrap().description, "one");
        assert_eq!(gen_rx.try_recv().unwrap().description, "two");
    }

    #[tokio::test]
    async fn test_copy_schedules_feedback_expiry() {
        let (executor, mut raw_rx, _gen_rx) = create_test_executor();

        executor
            .execute_command(&Cmd::CopyToClipboard {
                text: "Brew Different".to_string(),
                index: 3,
            })
            .unwrap();

        // The expiry must not fire before the display window has elapsed
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(raw_rx.try_recv().is_err());

        tokio::time::sleep(COPY_FEEDBACK_TTL).await;
        assert_eq!(raw_rx.recv().await, Some(RawMsg::CopyFeedbackExpired(3)));
    }
}
