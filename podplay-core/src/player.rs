use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::{
    commands::{PlayerCommand, PlayerEvent},
    config::PlayerConfig,
    episode::Episode,
    error::PlayerError,
    state::{EndOfEpisode, PlaybackState},
};

/// Read view of the player handed to sibling components
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub episodes: Vec<Episode>,
    pub current_index: usize,
    pub current_episode: Option<Episode>,
    pub is_playing: bool,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

/// Owns the playback state and broadcasts every change to its subscribers
pub struct Player {
    state: PlaybackState,
    subscribers: Vec<Sender<PlayerEvent>>,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        log::debug!("Creating player with {:?}", config);
        Self {
            state: PlaybackState::with_config(config),
            subscribers: Vec::new(),
        }
    }

    /// Register a new listener. Events are delivered in dispatch order.
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episodes: self.state.queue().to_vec(),
            current_index: self.state.cursor(),
            current_episode: self.state.current().cloned(),
            is_playing: self.state.is_playing(),
            has_next: self.state.has_next(),
            has_previous: self.state.has_previous(),
            is_looping: self.state.is_looping(),
            is_shuffling: self.state.is_shuffling(),
        }
    }

    /// Apply a command and publish what changed
    pub fn dispatch(&mut self, command: PlayerCommand) -> Result<(), PlayerError> {
        log::debug!("Applying command: {}", command);

        let events = match self.apply(command) {
            Ok(events) => events,
            Err(e) => {
                log::warn!("Command rejected: {}", e);
                return Err(e);
            }
        };

        for event in events {
            self.publish(event);
        }
        Ok(())
    }

    fn apply(&mut self, command: PlayerCommand) -> Result<Vec<PlayerEvent>, PlayerError> {
        let mut events = Vec::new();
        match command {
            PlayerCommand::Play(episode) => {
                let was_playing = self.state.is_playing();
                self.state.play_single(episode);
                self.started(was_playing, &mut events);
            }
            PlayerCommand::PlayList { episodes, index } => {
                let was_playing = self.state.is_playing();
                self.state.play_queue(episodes, index)?;
                self.started(was_playing, &mut events);
            }
            PlayerCommand::SetPlaying(playing) => {
                if self.state.is_playing() != playing {
                    self.state.set_playing(playing);
                    events.push(PlayerEvent::PlayingChanged(playing));
                }
            }
            PlayerCommand::TogglePlay => {
                events.push(PlayerEvent::PlayingChanged(self.state.toggle_play()));
            }
            PlayerCommand::ToggleLoop => {
                events.push(PlayerEvent::LoopingChanged(self.state.toggle_loop()));
            }
            PlayerCommand::ToggleShuffle => {
                events.push(PlayerEvent::ShufflingChanged(self.state.toggle_shuffle()));
            }
            PlayerCommand::Next => {
                if let Some(index) = self.state.advance() {
                    self.moved(index, &mut events);
                }
            }
            PlayerCommand::Previous => {
                if let Some(index) = self.state.retreat() {
                    self.moved(index, &mut events);
                }
            }
            PlayerCommand::Clear => {
                if !self.state.is_empty() {
                    self.state.clear();
                    events.push(PlayerEvent::Cleared);
                }
            }
            PlayerCommand::EpisodeEnded => {
                let outcome = self.state.episode_ended();
                log::debug!("Episode ended: {}", outcome);
                match outcome {
                    EndOfEpisode::Idle => {}
                    EndOfEpisode::Repeat => events.push(PlayerEvent::Restarted),
                    EndOfEpisode::Advanced(index) => self.moved(index, &mut events),
                    EndOfEpisode::Cleared => events.push(PlayerEvent::Cleared),
                }
            }
        }
        Ok(events)
    }

    fn started(&self, was_playing: bool, events: &mut Vec<PlayerEvent>) {
        events.push(PlayerEvent::QueueChanged(self.state.queue().to_vec()));
        self.moved(self.state.cursor(), events);
        if !was_playing {
            events.push(PlayerEvent::PlayingChanged(true));
        }
    }

    fn moved(&self, index: usize, events: &mut Vec<PlayerEvent>) {
        if let Some(episode) = self.state.current() {
            events.push(PlayerEvent::EpisodeChanged {
                index,
                episode: episode.clone(),
            });
        }
    }

    fn publish(&mut self, event: PlayerEvent) {
        // Drop listeners whose receiver is gone
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
