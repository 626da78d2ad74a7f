//! Event sources: the producer side of the bus.

use crate::{
    backend::{self, RawInput},
    queue::Publisher,
};
use std::collections::VecDeque;

/// Something the host loop polls for new events once per iteration.
///
/// Implementations push whatever they collected through the given
/// [`Publisher`] and return how many events they queued. They never dispatch.
pub trait EventSource {
    /// Queue every event that became available since the last poll.
    fn poll(&mut self, publisher: &Publisher) -> usize;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn poll(&mut self, publisher: &Publisher) -> usize {
        (**self).poll(publisher)
    }
}

/// A source that never produces anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl EventSource for NoSource {
    fn poll(&mut self, _publisher: &Publisher) -> usize {
        0
    }
}

/// Replays scripted backend notifications, one frame per poll.
///
/// Each frame is translated with [`backend::translate`]; notifications that
/// cannot be translated are skipped with a warning.
///
/// # Example
///
/// ```rust,ignore
/// let source = ScriptedSource::new()
///     .frame([RawInput::Resized { width: 800, height: 600 }])
///     .frame([RawInput::Closed]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Vec<RawInput>>,
}

impl ScriptedSource {
    /// Create a source with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame of notifications.
    pub fn frame(mut self, inputs: impl IntoIterator<Item = RawInput>) -> Self {
        self.frames.push_back(inputs.into_iter().collect());
        self
    }

    /// Frames not yet polled.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedSource {
    fn poll(&mut self, publisher: &Publisher) -> usize {
        let Some(frame) = self.frames.pop_front() else {
            return 0;
        };

        let mut queued = 0;
        for input in &frame {
            match backend::translate(input) {
                Ok(Some(event)) => {
                    publisher.queue_event(event);
                    queued += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(?input, error = %err, "skipping backend notification");

                    #[cfg(not(feature = "tracing"))]
                    let _ = err;
                }
            }
        }
        queued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;

    #[test]
    fn test_one_frame_per_poll() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        let mut source = ScriptedSource::new()
            .frame([
                RawInput::Resized {
                    width: 800,
                    height: 600,
                },
                RawInput::Focus { focused: true },
                RawInput::Key {
                    key: 65,
                    scancode: 0,
                    action: 9,
                    mods: 0,
                },
            ])
            .frame([RawInput::Closed]);

        assert_eq!(source.poll(&publisher), 1);
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.poll(&publisher), 1);
        assert_eq!(source.poll(&publisher), 0);
        assert_eq!(bus.pending(), 2);
    }

    #[test]
    fn test_no_source() {
        let bus = EventBus::new();
        assert_eq!(NoSource.poll(&bus.publisher()), 0);
    }
}
