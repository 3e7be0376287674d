use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd_executor::CmdExecutor,
    raw_msg::RawMsg,
    state::AppState,
    textarea_engine::TextAreaEngine,
    translator::translate_raw_to_domain,
    update::update,
};

/// Drives the Elm cycle: drains raw messages, translates them, folds them
/// into state and executes the resulting commands.
///
/// Editor keys are queued by the pure update and applied here through the
/// injected [`TextAreaEngine`], keeping the update function free of widget
/// state.
pub struct Runtime {
    state: AppState,
    executor: CmdExecutor,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    raw_rx: mpsc::UnboundedReceiver<RawMsg>,
    textarea_engine: Box<dyn TextAreaEngine + Send>,
}

impl Runtime {
    pub fn new(
        state: AppState,
        executor: CmdExecutor,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
        raw_rx: mpsc::UnboundedReceiver<RawMsg>,
        textarea_engine: Box<dyn TextAreaEngine + Send>,
    ) -> Self {
        Self {
            state,
            executor,
            raw_tx,
            raw_rx,
            textarea_engine,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A sender for external producers (services, timers)
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_tx.clone()
    }

    /// Enqueue a raw message for the next update cycle
    pub fn send_raw_msg(&self, raw: RawMsg) {
        let _ = self.raw_tx.send(raw);
    }

    /// Drain all pending raw messages and process them to quiescence
    pub fn run_update_cycle(&mut self) -> Result<()> {
        while let Ok(raw) = self.raw_rx.try_recv() {
            for msg in translate_raw_to_domain(raw, &self.state) {
                let (next_state, cmds) = update(msg, std::mem::take(&mut self.state));
                self.state = next_state;
                self.executor.execute_commands(&cmds)?;
            }
            // Editor keys take effect before the next raw message is seen,
            // so a submit arriving right after typing reads the final text
            self.apply_pending_editor_input();
        }

        Ok(())
    }

    /// Apply queued editor keys to the textarea snapshot
    fn apply_pending_editor_input(&mut self) {
        if self.state.ui.pending_input_keys.is_empty() {
            return;
        }
        let keys = std::mem::take(&mut self.state.ui.pending_input_keys);
        self.state.ui.textarea = self
            .textarea_engine
            .apply_keys(&self.state.ui.textarea, &keys);
    }
}
