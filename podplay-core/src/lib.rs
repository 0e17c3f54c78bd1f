pub mod commands;
pub mod config;
pub mod episode;
pub mod error;
pub mod player;
pub mod state;

pub use commands::{PlayerCommand, PlayerEvent};
pub use config::PlayerConfig;
pub use episode::Episode;
pub use error::PlayerError;
pub use player::{Player, PlayerSnapshot};
pub use state::{EndOfEpisode, PlaybackState};
