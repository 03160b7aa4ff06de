use rodio::{OutputStream, OutputStreamHandle, Sink, Source, source::SineWave};
use std::time::Duration;

use crate::world::FrameEvent;

/// Short tones played for game events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub millis: u64,
}

impl Tone {
    /// Picks the tone for an event, if it makes a sound at all.
    pub fn for_event(event: &FrameEvent) -> Option<Self> {
        let (frequency, millis) = match event {
            FrameEvent::Fired { .. } => (880.0, 40),
            FrameEvent::EnemyDestroyed { .. } => (660.0, 80),
            FrameEvent::PlayerHit { .. } => (150.0, 160),
            FrameEvent::GameOver { .. } => (110.0, 600),
            FrameEvent::EnemySpawned { .. }
            | FrameEvent::SpawnRejected { .. }
            | FrameEvent::EnemyEscaped { .. } => return None,
        };
        Some(Self { frequency, millis })
    }
}

/// Audio manager for playing sound effects
pub struct AudioManager {
    /// Keeps the device open; `None` when audio is disabled or unavailable
    output: Option<(OutputStream, OutputStreamHandle)>,
    volume: f32,
}

impl AudioManager {
    /// Opens the default output device
    pub fn new(volume: f32) -> Result<Self, Box<dyn std::error::Error>> {
        let output = OutputStream::try_default()?;
        Ok(Self {
            output: Some(output),
            volume,
        })
    }

    /// A manager that never makes a sound
    pub fn silent() -> Self {
        Self {
            output: None,
            volume: 0.0,
        }
    }

    /// Falls back to silence when no device can be opened.
    pub fn new_or_silent(enabled: bool, volume: f32) -> Self {
        if !enabled {
            log::info!("Audio disabled by config");
            return Self::silent();
        }
        Self::new(volume).unwrap_or_else(|err| {
            log::warn!("Failed to initialize audio, continuing without it: {err}");
            Self::silent()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn play_event(&self, event: &FrameEvent) {
        if let Some(tone) = Tone::for_event(event) {
            self.play_tone(tone);
        }
    }

    pub fn play_tone(&self, tone: Tone) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        // Playback errors are not worth interrupting the game for
        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(self.volume);
            sink.append(
                SineWave::new(tone.frequency).take_duration(Duration::from_millis(tone.millis)),
            );
            sink.detach();
        }
    }
}
