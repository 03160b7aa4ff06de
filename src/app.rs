use color_eyre::Result;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config::GameConfig;
use crate::hud::Hud;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView, Viewport};
use crate::rng::{RandomSource, SeededSource};
use crate::world::{FrameEvent, World};

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    world: World,
    rng: Box<dyn RandomSource>,
    /// Last computed mapping from terminal cells to world points
    viewport: Viewport,
    frame_duration: Duration,
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: GameConfig, release_events: bool) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => {
                log::info!("Using fixed seed {seed}");
                Box::new(SeededSource::new(seed))
            }
            None => Box::new(SeededSource::from_entropy()),
        };
        let audio_manager = AudioManager::new_or_silent(config.audio, config.volume);
        Self::with_parts(config, release_events, rng, audio_manager)
    }

    /// Builds an app around an explicit random source and audio output.
    pub fn with_parts(
        config: GameConfig,
        release_events: bool,
        rng: Box<dyn RandomSource>,
        audio_manager: AudioManager,
    ) -> Self {
        let viewport = Viewport::new(Rect::default(), config.world_width, config.world_height);
        Self {
            running: true,
            frame_duration: config.frame_duration(),
            world: World::new(config),
            rng,
            viewport,
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Calculate FPS
            let frame_time = frame_start.duration_since(self.last_frame_time);
            self.last_frame_time = frame_start;
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            self.draw(terminal)?;

            // Poll input events and get actions
            self.input_manager.poll_events(self.world.state)?;
            let actions = self.input_manager.get_actions(self.world.state);
            self.input_manager.end_frame();

            self.process_actions(&actions);
            self.step();

            // Hold the configured frame rate without spinning
            if let Some(remaining) = self.frame_duration.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        log::info!("Quit at frame {}", self.world.frame_count);
        Ok(())
    }

    /// Draws one frame and refreshes the pointer mapping for the new size.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.viewport = Viewport::new(
            Rect::new(0, 0, size.width, size.height),
            self.world.config.world_width,
            self.world.config.world_height,
        );

        let hud = Hud::project(&self.world);
        terminal.draw(|frame| {
            let view = RenderView {
                world: &self.world,
                hud: &hud,
                area: frame.area(),
                fps: self.fps,
            };
            self.renderer.render(frame, &view);
        })?;
        Ok(())
    }

    /// Process input actions and update game state accordingly
    pub fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match *action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::Pause | InputAction::Resume => {
                    self.world.toggle_pause();
                }
                InputAction::Restart => {
                    self.world.restart();
                }
                InputAction::PointerMoved { column, row } => {
                    if let Some(pointer) = self.viewport.to_world(column, row) {
                        self.world.point_at(pointer);
                    }
                }
                InputAction::Move(direction) => {
                    self.world.move_player(direction);
                }
                InputAction::Fire => {
                    if let Some(event) = self.world.fire() {
                        self.handle_event(&event);
                    }
                }
            }
        }
    }

    /// Advances the world one frame and reacts to what happened.
    pub fn step(&mut self) {
        let events = self.world.tick(self.rng.as_mut());
        for event in &events {
            self.handle_event(event);
        }
    }

    fn handle_event(&self, event: &FrameEvent) {
        match event {
            FrameEvent::SpawnRejected { .. } => log::trace!("{event:?}"),
            FrameEvent::GameOver { .. } => {}
            _ => log::debug!("{event:?}"),
        }
        self.audio_manager.play_event(event);
    }
}
