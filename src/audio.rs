//! Fire-and-forget sound playback.
//!
//! Tones are synthesized on the fly, so there are no sound assets to load.
//! Each sound owns a persistent sink: a retrigger stops the running tone and
//! restarts it from the beginning, so a sound never overlaps itself.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

/// The three sounds the game can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Jump,
    Hit,
    Score,
}

pub struct AudioOutput {
    _stream: OutputStream,
    jump: Sink,
    hit: Sink,
    score: Sink,
}

impl AudioOutput {
    /// Open the default output device. Returns `None` when no device is
    /// available; callers treat that as "play silently".
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        let jump = Sink::try_new(&handle).ok()?;
        let hit = Sink::try_new(&handle).ok()?;
        let score = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream: stream,
            jump,
            hit,
            score,
        })
    }

    /// Trigger a sound, restarting it if it is still playing. Never blocks.
    pub fn play(&self, sound: SoundId) {
        match sound {
            SoundId::Jump => {
                self.jump.stop();
                self.jump.append(tone(740.0, 90, 0.20));
                self.jump.play();
            }
            SoundId::Hit => {
                self.hit.stop();
                self.hit.append(tone(130.0, 250, 0.25));
                self.hit.play();
            }
            SoundId::Score => {
                self.score.stop();
                self.score.append(tone(523.0, 80, 0.18));
                self.score.append(tone(659.0, 110, 0.18));
                self.score.play();
            }
        }
    }
}

fn tone(freq: f32, millis: u64, volume: f32) -> impl Source<Item = f32> + Send + 'static {
    let mut source = SineWave::new(freq).take_duration(Duration::from_millis(millis));
    // Fade the tail to avoid a click when the tone cuts off.
    source.set_filter_fadeout();
    source.amplify(volume)
}
