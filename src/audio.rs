//! Sound-cue seam
//!
//! The simulation emits `GameEvent`s; the host owns actual playback. Playback
//! failures are logged and swallowed, never surfaced to gameplay.

use crate::sim::GameEvent;

/// Destination for sound cues. Implemented by the host's audio backend.
pub trait CueSink {
    fn play(&mut self, cue: GameEvent) -> Result<(), String>;
}

/// Sink that only logs cues. Default when no audio backend is wired up.
#[derive(Debug, Default)]
pub struct LogSink {
    pub muted: bool,
}

impl CueSink for LogSink {
    fn play(&mut self, cue: GameEvent) -> Result<(), String> {
        if !self.muted {
            log::debug!("cue: {cue:?}");
        }
        Ok(())
    }
}

/// Forward a tick's cue events to the sink, swallowing failures
pub fn play_cues(events: &[GameEvent], sink: &mut dyn CueSink) {
    for &cue in events {
        if let Err(e) = sink.play(cue) {
            log::warn!("Audio cue {cue:?} failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        played: Vec<GameEvent>,
        fail: bool,
    }

    impl CueSink for Recorder {
        fn play(&mut self, cue: GameEvent) -> Result<(), String> {
            if self.fail {
                return Err("backend gone".into());
            }
            self.played.push(cue);
            Ok(())
        }
    }

    #[test]
    fn test_cues_forwarded_in_order() {
        let mut sink = Recorder {
            played: Vec::new(),
            fail: false,
        };
        let events = [GameEvent::Shoot, GameEvent::Hit, GameEvent::GameOver];
        play_cues(&events, &mut sink);
        assert_eq!(sink.played, events);
    }

    #[test]
    fn test_failures_are_swallowed() {
        let mut sink = Recorder {
            played: Vec::new(),
            fail: true,
        };
        // Must not panic or propagate
        play_cues(&[GameEvent::Shoot], &mut sink);
        assert!(sink.played.is_empty());
    }
}
