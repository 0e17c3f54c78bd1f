use crate::episode::Episode;

/// Commands sent from sibling components to the player
#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum PlayerCommand {
    /// Play a single episode, replacing the queue
    Play(Episode),
    /// Replace the queue and start at `index`
    PlayList { episodes: Vec<Episode>, index: usize },
    /// Set play/pause explicitly (e.g. from the media element's own events)
    SetPlaying(bool),
    /// Flip play/pause
    TogglePlay,
    /// Flip looping
    ToggleLoop,
    /// Flip shuffling
    ToggleShuffle,
    /// Skip to next episode
    Next,
    /// Skip to previous episode
    Previous,
    /// Empty the queue
    Clear,
    /// The media element reported the current episode finished
    EpisodeEnded,
}

/// Notifications sent from the player to its subscribers
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The queue contents were replaced
    QueueChanged(Vec<Episode>),
    /// The cursor now points at this episode
    EpisodeChanged { index: usize, episode: Episode },
    PlayingChanged(bool),
    LoopingChanged(bool),
    ShufflingChanged(bool),
    /// The current episode starts over
    Restarted,
    /// The queue was emptied
    Cleared,
}
