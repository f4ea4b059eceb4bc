//! Sequential queue player
//!
//! A cursor over a fixed, already-materialized list of videos, typically
//! a projection captured at the moment playback starts. The queue does not
//! re-project if the underlying playlist changes mid-playback.

use crate::error::{PlaybackError, Result};
use tubedeck_core::VideoRef;

/// Result of advancing the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The next video to play
    Next(VideoRef),

    /// The queue is exhausted and has been cleared (stop-at-end, no loop)
    EndOfQueue,
}

/// Sequential playback cursor
///
/// States:
/// - `Empty`: no queue loaded; `current`/`advance`/`retreat` fail
/// - `Ready`: queue loaded with `0 <= position < len`
///
/// ```text
/// load([a, b, c])      current = a
/// advance()  -> b
/// advance()  -> c
/// advance()  -> EndOfQueue   (queue cleared)
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueuePlayer {
    queue: Vec<VideoRef>,
    position: usize,
}

impl QueuePlayer {
    /// Create a player with no queue loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a queue and position the cursor at its first entry
    pub fn load(&mut self, queue: Vec<VideoRef>) -> Result<()> {
        if queue.is_empty() {
            return Err(PlaybackError::InvalidOperation(
                "cannot load an empty queue".to_string(),
            ));
        }
        self.queue = queue;
        self.position = 0;
        Ok(())
    }

    /// The video at the cursor
    pub fn current(&self) -> Result<&VideoRef> {
        self.queue.get(self.position).ok_or(PlaybackError::QueueEmpty)
    }

    /// Move the cursor forward
    ///
    /// Past the last entry the queue is cleared and `EndOfQueue` is
    /// returned; the player is back in the `Empty` state.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.queue.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        self.position += 1;
        if self.position >= self.queue.len() {
            self.stop();
            return Ok(Advance::EndOfQueue);
        }
        Ok(Advance::Next(self.queue[self.position].clone()))
    }

    /// Move the cursor backward, clamped at the first entry
    ///
    /// At the front of the queue this replays the first video instead of
    /// failing.
    pub fn retreat(&mut self) -> Result<VideoRef> {
        if self.queue.is_empty() {
            return Err(PlaybackError::QueueEmpty);
        }

        self.position = self.position.saturating_sub(1);
        Ok(self.queue[self.position].clone())
    }

    /// Clear the queue unconditionally
    pub fn stop(&mut self) {
        self.queue.clear();
        self.position = 0;
    }

    /// Cursor position within the loaded queue
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of videos in the loaded queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no queue is loaded
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Videos from the cursor onward, current first
    pub fn remaining(&self) -> &[VideoRef] {
        &self.queue[self.position.min(self.queue.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubedeck_core::NewVideo;

    fn video(id: &str, title: &str) -> VideoRef {
        NewVideo::new(id, title)
            .into_video_ref(tubedeck_core::types::DEFAULT_MAX_RATING)
            .unwrap()
    }

    #[test]
    fn load_rejects_empty_queue() {
        let mut player = QueuePlayer::new();
        assert!(matches!(
            player.load(vec![]),
            Err(PlaybackError::InvalidOperation(_))
        ));
        assert!(matches!(player.current(), Err(PlaybackError::QueueEmpty)));
    }

    #[test]
    fn load_positions_cursor_at_first_entry() {
        let mut player = QueuePlayer::new();
        player.load(vec![video("a", "A"), video("b", "B")]).unwrap();
        assert_eq!(player.current().unwrap().id.as_str(), "a");
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn advance_steps_through_and_ends_empty() {
        let mut player = QueuePlayer::new();
        player
            .load(vec![video("a", "A"), video("b", "B"), video("c", "C")])
            .unwrap();

        assert!(matches!(player.advance().unwrap(), Advance::Next(v) if v.id.as_str() == "b"));
        assert!(matches!(player.advance().unwrap(), Advance::Next(v) if v.id.as_str() == "c"));
        assert_eq!(player.advance().unwrap(), Advance::EndOfQueue);

        // exhausted queue is cleared, current now fails
        assert!(player.is_empty());
        assert!(matches!(player.current(), Err(PlaybackError::QueueEmpty)));
        assert!(matches!(player.advance(), Err(PlaybackError::QueueEmpty)));
    }

    #[test]
    fn retreat_clamps_at_front() {
        let mut player = QueuePlayer::new();
        player.load(vec![video("a", "A"), video("b", "B")]).unwrap();

        // at position 0, retreat stays put and replays the first video
        let first = player.retreat().unwrap();
        assert_eq!(first.id.as_str(), "a");
        assert_eq!(player.position(), 0);

        player.advance().unwrap();
        let back = player.retreat().unwrap();
        assert_eq!(back.id.as_str(), "a");
    }

    #[test]
    fn stop_clears_unconditionally() {
        let mut player = QueuePlayer::new();
        player.load(vec![video("a", "A")]).unwrap();
        player.stop();
        assert!(player.is_empty());
        assert!(matches!(player.current(), Err(PlaybackError::QueueEmpty)));
    }

    #[test]
    fn remaining_starts_at_cursor() {
        let mut player = QueuePlayer::new();
        player
            .load(vec![video("a", "A"), video("b", "B"), video("c", "C")])
            .unwrap();
        player.advance().unwrap();

        let ids: Vec<&str> = player.remaining().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn reload_after_end_starts_over() {
        let mut player = QueuePlayer::new();
        player.load(vec![video("a", "A")]).unwrap();
        assert_eq!(player.advance().unwrap(), Advance::EndOfQueue);

        player.load(vec![video("b", "B")]).unwrap();
        assert_eq!(player.current().unwrap().id.as_str(), "b");
    }
}
