use color_eyre::eyre::Result;
use ratatui::layout::{Constraint, Direction, Layout};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd_executor::CmdExecutor,
        raw_msg::RawMsg,
        state::{ui::View, AppState},
    },
    infrastructure::{
        config::Config,
        gemini::GeminiClient,
        generation_service::GenerationService,
        textarea_engine::TuiTextAreaEngine,
        tui::{self, Tui},
    },
    integration::runtime::Runtime,
    presentation::components::{
        about::AboutComponent, generator::GeneratorComponent, status_bar::StatusBarComponent,
        tab_bar::TabBarComponent,
    },
};

/// Owns the terminal, the runtime and the background generation service,
/// and drives them from the event loop.
pub struct AppRunner<'a> {
    runtime: Runtime,
    tui: Tui,
    generation_cancel: CancellationToken,
    // Presentation components (stateless/pure rendering)
    tab_bar: TabBarComponent,
    generator_view: GeneratorComponent<'a>,
    about_view: AboutComponent,
    status_bar: StatusBarComponent,
}

impl<'a> AppRunner<'a> {
    /// Create a new AppRunner with the runtime and infrastructure initialized
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel::<RawMsg>();

        // Start the generation service in the background
        let client = GeminiClient::new(&config)?;
        let (generation_tx, generation_cancel, generation_service) =
            GenerationService::new(client, raw_tx.clone());
        generation_service.run();

        let mut executor = CmdExecutor::new(raw_tx.clone());
        executor.set_generation_sender(generation_tx);

        let state = AppState::new_with_config(config);
        let runtime = Runtime::new(
            state,
            executor,
            raw_tx,
            raw_rx,
            Box::new(TuiTextAreaEngine),
        );

        let tui = Tui::new()?.tick_rate(tick_rate).frame_rate(frame_rate);

        Ok(Self {
            runtime,
            tui,
            generation_cancel,
            tab_bar: TabBarComponent::new(),
            generator_view: GeneratorComponent::new(),
            about_view: AboutComponent::new(),
            status_bar: StatusBarComponent::new(),
        })
    }

    /// Run the main loop: forward TUI events as raw messages, run update
    /// cycles and render on frame pulses.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            if let Some(event) = self.tui.next().await {
                match &event {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                    tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(*key)),
                    tui::Event::Resize(..) => {
                        // The terminal autoresizes on the next draw
                    }
                    tui::Event::Render => {
                        // Drawn below, after the update cycle
                    }
                    _ => {}
                }

                self.runtime.run_update_cycle()?;

                if matches!(event, tui::Event::Render) {
                    self.render()?;
                }
            }

            if self.runtime.state().system.should_suspend {
                self.tui.suspend()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.runtime.run_update_cycle()?;
                self.tui.resume()?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        // Shut down the generation service and restore the terminal
        self.generation_cancel.cancel();
        self.tui.exit()?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        let tab_bar = &self.tab_bar;
        let generator_view = &mut self.generator_view;
        let about_view = &self.about_view;
        let status_bar = &self.status_bar;

        self.tui.draw(|frame| {
            let area = frame.area();
            let layout = Layout::new(
                Direction::Vertical,
                [
                    Constraint::Length(1), // Tab bar
                    Constraint::Min(0),    // Active view
                    Constraint::Length(2), // Status bar
                ],
            )
            .split(area);

            tab_bar.view(&state, frame, layout[0]);
            match state.ui.active_view {
                View::Generator => generator_view.view(&state, frame, layout[1]),
                View::About => about_view.view(&state, frame, layout[1]),
            }
            status_bar.view(&state, frame, layout[2]);
        })?;
        Ok(())
    }
}
