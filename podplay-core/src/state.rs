use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{config::PlayerConfig, episode::Episode, error::PlayerError};

/// Outcome of the current episode reaching its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum EndOfEpisode {
    /// Queue was empty, nothing to do
    Idle,
    /// Looping is on, the same episode starts over
    Repeat,
    /// Moved on to the episode at this index
    Advanced(usize),
    /// Reached the end of the queue and cleared it
    Cleared,
}

/// The playback state: queue, cursor and flags
#[derive(Debug, Clone)]
pub struct PlaybackState {
    queue: Vec<Episode>,
    cursor: usize,
    playing: bool,
    looping: bool,
    shuffling: bool,
    rng: StdRng,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::with_config(PlayerConfig::default())
    }

    pub fn with_config(config: PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            queue: Vec::new(),
            cursor: 0,
            playing: false,
            looping: config.looping,
            shuffling: config.shuffling,
            rng,
        }
    }

    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    /// Index of the current episode, meaningless while the queue is empty
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.shuffling || self.cursor + 1 < self.queue.len()
    }

    /// Get current episode
    pub fn current(&self) -> Option<&Episode> {
        self.queue.get(self.cursor)
    }

    /// Replace the queue with a single episode and start playing it
    pub fn play_single(&mut self, episode: Episode) {
        self.queue = vec![episode];
        self.cursor = 0;
        self.playing = true;
    }

    /// Replace the queue with `episodes` and start playing at `index`.
    ///
    /// The state is left untouched when the list is empty or the index is
    /// out of range.
    pub fn play_queue(&mut self, episodes: Vec<Episode>, index: usize) -> Result<(), PlayerError> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyQueue);
        }
        if index >= episodes.len() {
            return Err(PlayerError::IndexOutOfRange {
                index,
                len: episodes.len(),
            });
        }
        self.queue = episodes;
        self.cursor = index;
        self.playing = true;
        Ok(())
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flip play/pause, returns the new value
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.looping = !self.looping;
        self.looping
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffling = !self.shuffling;
        self.shuffling
    }

    /// Move to the next episode. Returns the new cursor, or `None` when
    /// nothing moved.
    pub fn advance(&mut self) -> Option<usize> {
        if self.queue.is_empty() {
            return None;
        }
        if self.shuffling {
            self.cursor = self.random_index();
        } else if self.has_next() {
            self.cursor += 1;
        } else {
            return None;
        }
        Some(self.cursor)
    }

    /// Move to the previous episode. Returns the new cursor, or `None` when
    /// nothing moved.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.queue.is_empty() {
            return None;
        }
        if self.shuffling {
            self.cursor = self.random_index();
        } else if self.has_previous() {
            self.cursor -= 1;
        } else {
            return None;
        }
        Some(self.cursor)
    }

    /// Empty the queue. Flags are kept as they are.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cursor = 0;
    }

    /// Decide what happens once the current episode finished playing
    pub fn episode_ended(&mut self) -> EndOfEpisode {
        if self.queue.is_empty() {
            return EndOfEpisode::Idle;
        }
        if self.looping {
            return EndOfEpisode::Repeat;
        }
        if self.has_next() {
            if let Some(index) = self.advance() {
                return EndOfEpisode::Advanced(index);
            }
        }
        self.clear();
        EndOfEpisode::Cleared
    }

    // Uniform over the whole queue, the current index included
    fn random_index(&mut self) -> usize {
        self.rng.random_range(0..self.queue.len())
    }
}
