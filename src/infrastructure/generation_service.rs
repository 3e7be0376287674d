use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::tagline,
    infrastructure::gemini::GeminiClient,
};

/// One unit of work for the generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub description: String,
}

/// GenerationService owns the outbound Gemini calls.
///
/// It receives requests over a channel, performs the HTTP call without ever
/// blocking the UI loop, and reports the outcome back as raw messages.
/// Requests are processed one at a time; the update function's loading flag
/// ensures at most one is ever queued.
pub struct GenerationService {
    client: GeminiClient,
    // Incoming channel
    op_rx: mpsc::UnboundedReceiver<GenerationRequest>,
    cancel_token: CancellationToken,
    // Outgoing channel
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewGenerationService = (
    mpsc::UnboundedSender<GenerationRequest>, // op_tx - requests to run
    CancellationToken,                        // shutdown signal
    GenerationService,
);

impl GenerationService {
    /// Create a new GenerationService
    pub fn new(client: GeminiClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewGenerationService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the GenerationService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                request = self.op_rx.recv() => {
                    match request {
                        Some(request) => self.handle_request(request).await,
                        None => {
                            tracing::debug!("generation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    tracing::info!("GenerationService received cancellation signal");
                    break;
                }
            }
        }
    }

    async fn handle_request(&self, request: GenerationRequest) {
        let prompt = tagline::build_prompt(&request.description);

        match self.client.generate(&prompt).await {
            Ok(text) => {
                let _ = self.raw_tx.send(RawMsg::GenerationCompleted(text));
            }
            Err(e) => {
                tracing::warn!("generation call failed: {e}");
                let _ = self.raw_tx.send(RawMsg::GenerationFailed(e.to_string()));
            }
        }
    }
}
